use crate::model::ProjectId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),

    #[error("Invalid import format: {0}")]
    InvalidFormat(String),

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FolioError>;
