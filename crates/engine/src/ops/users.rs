use sea_orm::{ActiveValue, QueryFilter, SqlErr, prelude::*};

use crate::{
    EngineError, ResultEngine, User,
    password::{hash_password, verify_password},
    users,
};

use super::{Engine, validate_name};

impl Engine {
    /// Registers a new user and stores the salted hash of `password`.
    ///
    /// The username is stored verbatim and compared case-sensitively; blank
    /// names or names with surrounding whitespace are refused. A taken
    /// username is reported as [`EngineError::ExistingKey`], also when
    /// another registration wins the race between lookup and insert.
    pub async fn register_user(&self, username: &str, password: &str) -> ResultEngine<User> {
        validate_name(username, "username")?;
        if password.is_empty() {
            return Err(EngineError::InvalidPassword(
                "password must not be empty".to_string(),
            ));
        }

        if self.find_user(username).await?.is_some() {
            return Err(EngineError::ExistingKey(format!("username '{username}'")));
        }

        let active = users::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            hashed_password: ActiveValue::Set(hash_password(password)?),
            ..Default::default()
        };
        let model = active
            .insert(&self.database)
            .await
            .map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    EngineError::ExistingKey(format!("username '{username}'"))
                }
                _ => EngineError::Database(err),
            })?;

        Ok(User::from(model))
    }

    /// Returns the user owning `username` if `password` matches its hash.
    ///
    /// Unknown usernames and wrong passwords give the same
    /// [`EngineError::InvalidCredentials`].
    pub async fn verify_credentials(&self, username: &str, password: &str) -> ResultEngine<User> {
        let Some(model) = self.find_user(username).await? else {
            return Err(EngineError::InvalidCredentials);
        };

        if !verify_password(password, &model.hashed_password)? {
            return Err(EngineError::InvalidCredentials);
        }

        Ok(User::from(model))
    }

    async fn find_user(&self, username: &str) -> ResultEngine<Option<users::Model>> {
        users::Entity::find()
            .filter(users::Column::Username.eq(username))
            .one(&self.database)
            .await
            .map_err(Into::into)
    }
}
