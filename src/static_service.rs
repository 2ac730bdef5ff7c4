use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::APP_CONFIG;

pub static DATABASE_CONNECTION: OnceCell<Arc<DatabaseConnection>> = OnceCell::new();

/// Connects once at startup and caches the pool for the whole process.
pub async fn get_database_connection() -> Arc<DatabaseConnection> {
    if let Some(connection) = DATABASE_CONNECTION.get() {
        return connection.clone();
    }

    let mut options = ConnectOptions::new(APP_CONFIG.database_url.clone());
    options
        .max_connections(APP_CONFIG.database_max_connections)
        .connect_timeout(Duration::from_secs(
            APP_CONFIG.database_connect_timeout_secs,
        ))
        .acquire_timeout(Duration::from_secs(
            APP_CONFIG.database_acquire_timeout_secs,
        ))
        .sqlx_logging(false);

    let connection = Database::connect(options)
        .await
        .expect("Failed to connect to database");

    DATABASE_CONNECTION
        .set(Arc::new(connection))
        .expect("DATABASE_CONNECTION already set");

    require_connection()
}

pub fn require_connection() -> Arc<DatabaseConnection> {
    DATABASE_CONNECTION
        .get()
        .expect("DATABASE_CONNECTION not set")
        .clone()
}
