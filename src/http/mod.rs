//! axum front end: routes map onto the repositories in [`crate::storage`].

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::AppError;
pub use router::create_router;
pub use state::AppState;
