mod connection;
mod item_ops;
mod types;

pub use types::{DatabaseBackendType, SeaOrmDatabase};
