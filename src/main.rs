use anyhow::Context;
use log::info;
use mission_control::storage::establish_connection;
use mission_control::{create_router, AppConfig, AppState};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("mission_control", log::LevelFilter::Info)
        .filter_module("sqlx", log::LevelFilter::Error)
        .filter_module("sea_orm", log::LevelFilter::Error)
        .parse_default_env()
        .init();

    let config = AppConfig::from_env()?;

    let db = establish_connection(&config.db)
        .await
        .with_context(|| format!("failed to open database {}", config.db.url))?;

    let app = create_router(AppState::new(db), config.request_timeout);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
