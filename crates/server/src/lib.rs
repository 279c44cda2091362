use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::IntoResponse,
};
use engine::EngineError;

use serde::Serialize;
pub use auth::{AuthUser, DEFAULT_TOKEN_TTL_MINUTES, TokenKeys};
pub use server::{ServerState, router, run_with_listener, spawn_with_listener};

mod analytics;
mod auth;
mod expenses;
mod server;
mod user;

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// Missing, malformed, expired or forged bearer token.
    Unauthorized,
    /// Request body or query string that does not deserialize.
    Validation(String),
    /// Failure that is logged and reported as a bare 500.
    Internal(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::ExistingKey(_)
        | EngineError::InvalidCredentials
        | EngineError::InvalidName(_)
        | EngineError::InvalidPassword(_) => StatusCode::BAD_REQUEST,
        EngineError::PasswordHash(_) | EngineError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        EngineError::PasswordHash(hash_err) => {
            tracing::error!("password hash error: {hash_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ServerError::Engine(err) => (
                status_for_engine_error(&err),
                message_for_engine_error(err),
            ),
            ServerError::Unauthorized => (StatusCode::UNAUTHORIZED, "Invalid token".to_string()),
            ServerError::Validation(err) => (StatusCode::BAD_REQUEST, err),
            ServerError::Internal(err) => {
                tracing::error!("internal error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(Error { error })).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<JsonRejection> for ServerError {
    fn from(value: JsonRejection) -> Self {
        Self::Validation(value.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(value: QueryRejection) -> Self {
        Self::Validation(value.body_text())
    }
}
