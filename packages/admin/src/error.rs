use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("password hashing error: {0}")]
    Hash(String),
}
