//! Bootstrap error types.

use std::path::PathBuf;

use thiserror::Error;

/// Any failure that aborts a bootstrap run.
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("DATABASE_URL is not set")]
    MissingDatabaseUrl,

    #[error("PRESS_ADMIN_PASSWORD is not set")]
    MissingAdminPassword,

    #[error("Configuration error: {0}")]
    Config(#[from] envy::Error),

    #[error("Failed to read {label} file {}: {source}", path.display())]
    ReadSql {
        label: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Failed to execute {label} file {}: {source}", path.display())]
    ExecuteSql {
        label: &'static str,
        path: PathBuf,
        source: sqlx::Error,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("Password hashing task failed: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error("No user with email {0}")]
    AdminNotFound(String),

    #[error("Missing tables: {}", .0.join(", "))]
    MissingTables(Vec<String>),
}
