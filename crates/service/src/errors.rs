use thiserror::Error;

use models::errors::ModelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {field}: {reason}")]
    Validation { field: &'static str, reason: String },
    #[error("artist already exists: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation { field, reason } => Self::Validation { field, reason },
            ModelError::Conflict(username) => Self::Conflict(username),
            ModelError::Db(msg) => Self::StoreUnavailable(msg),
        }
    }
}
