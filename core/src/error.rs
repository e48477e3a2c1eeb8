use thiserror::Error;

#[derive(Error, Debug)]
pub enum DelegationError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid task '{description}': {reason}")]
    InvalidTask { description: String, reason: String },

    #[error("Unknown category '{name}'")]
    UnknownCategory { name: String },

    #[error("Tool '{name}' not found in catalog")]
    UnknownTool { name: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type DelegationResult<T> = Result<T, DelegationError>;
