//! HTTP/JSON backend for scientists, the planets they visit, and the missions
//! that connect the two, stored in SQLite through sea-orm.

pub mod config;
pub mod http;
pub mod storage;

pub use config::AppConfig;
pub use http::{create_router, AppState};
