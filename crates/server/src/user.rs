//! Registration and login endpoints.

use api_types::{
    Message,
    user::{AccessToken, UserCredentials},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use engine::EngineError;

use crate::{ServerError, server::ServerState};

pub async fn welcome() -> Json<Message> {
    Json(Message::new("Welcome to the Expense API!"))
}

/// Handle requests for registering a new user
pub async fn create_user(
    State(state): State<ServerState>,
    payload: Result<Json<UserCredentials>, JsonRejection>,
) -> Result<Json<Message>, ServerError> {
    let Json(payload) = payload?;

    let user = state
        .engine
        .register_user(&payload.username, &payload.password)
        .await?;
    tracing::info!(user_id = user.id, "created user {}", user.username);

    Ok(Json(Message::new("User created successfully")))
}

/// Handle login requests, answering with a bearer token
pub async fn login(
    State(state): State<ServerState>,
    payload: Result<Json<UserCredentials>, JsonRejection>,
) -> Result<Json<AccessToken>, ServerError> {
    let Json(payload) = payload?;

    let user = match state
        .engine
        .verify_credentials(&payload.username, &payload.password)
        .await
    {
        Ok(user) => user,
        Err(EngineError::InvalidCredentials) => {
            tracing::info!("failed login for {}", payload.username);
            return Err(EngineError::InvalidCredentials.into());
        }
        Err(err) => return Err(err.into()),
    };

    let token = state.tokens.issue(&user)?;
    tracing::info!(user_id = user.id, "issued token for {}", user.username);

    Ok(Json(AccessToken::bearer(token)))
}
