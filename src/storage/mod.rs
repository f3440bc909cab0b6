pub mod connection;
pub mod dto;
pub mod entity;
pub mod error;
pub mod repository;

pub use connection::{create_schema, establish_connection};
pub use error::StoreError;
