//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`ExistingKey`] thrown when a username is already registered.
//! - [`InvalidCredentials`] thrown when a login does not match any user.
//! - [`InvalidName`] thrown for an empty username or one with surrounding
//!   whitespace.
//! - [`Database`] wrapping every failure of the underlying store.
//!
//!  [`ExistingKey`]: EngineError::ExistingKey
//!  [`InvalidCredentials`]: EngineError::InvalidCredentials
//!  [`InvalidName`]: EngineError::InvalidName
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("{0} already exists")]
    ExistingKey(String),
    #[error("Incorrect username or password")]
    InvalidCredentials,
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid password: {0}")]
    InvalidPassword(String),
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidCredentials, Self::InvalidCredentials) => true,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::InvalidPassword(a), Self::InvalidPassword(b)) => a == b,
            (Self::PasswordHash(a), Self::PasswordHash(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
