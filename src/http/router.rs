//! Route table and middleware.

use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use log::info;
use tower::ServiceBuilder;
use tower_http::timeout::TimeoutLayer;

use super::handlers;
use super::state::AppState;

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();
    let resp = next.run(req).await;
    info!(
        "{} {} -> {} ({} ms)",
        method,
        path,
        resp.status().as_u16(),
        started.elapsed().as_millis()
    );
    resp
}

/// Request logging outermost, then the per-request deadline (408 on expiry).
pub fn with_layers(router: Router, request_timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(log_request))
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            )),
    )
}

pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::home))
        .route(
            "/scientists",
            get(handlers::list_scientists).post(handlers::create_scientist),
        )
        .route(
            "/scientists/{id}",
            get(handlers::get_scientist)
                .patch(handlers::update_scientist)
                .delete(handlers::delete_scientist),
        )
        .route("/planets", get(handlers::list_planets))
        .route("/missions", post(handlers::create_mission))
        .with_state(state);
    with_layers(routes, request_timeout)
}
