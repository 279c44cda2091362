use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("invalid base_url: {0}")]
    InvalidUrl(String),
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Map a non-success status and its `error` message to a [`ClientError`].
pub(crate) fn error_for_status(status: StatusCode, message: String) -> ClientError {
    match status.as_u16() {
        401 => ClientError::Unauthorized(message),
        404 => ClientError::NotFound(message),
        400..=499 => ClientError::BadRequest(message),
        _ => ClientError::Server(message),
    }
}
