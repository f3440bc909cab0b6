use sea_orm::DatabaseConnection;

/// Shared by every handler; the connection is a cheap-to-clone pool handle.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
