//! Error types for the Courtside application

use thiserror::Error;

/// Errors that can occur in the Courtside application
#[derive(Error, Debug)]
pub enum CourtsideError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error in {path}: {message}")]
    Config { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, CourtsideError>;
