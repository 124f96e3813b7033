//! Error types for the question answering service.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result type alias for agri-qa operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the edges of the system.
///
/// Answering a question never fails on missing data; these variants cover
/// request validation, configuration, data loading and I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid caller input (e.g. an empty question)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Intent pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Data provider failed to supply records
    #[error("Data load error: {0}")]
    DataLoad(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        Error::Config(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let message = match &self {
            Error::InvalidInput(message) => message.clone(),
            other => other.to_string(),
        };

        let body = serde_json::json!({
            "error": message,
        });

        (self.status_code(), axum::Json(body)).into_response()
    }
}
