use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    #[error("Content document error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Not found: {0}")]
    NotFound(String),
}
