use sea_orm::DatabaseConnection;

use crate::{EngineError, ResultEngine};

mod analytics;
mod expenses;
mod users;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// Names are stored exactly as given, so blanks and surrounding whitespace
/// are refused rather than rewritten.
fn validate_name(value: &str, label: &str) -> ResultEngine<()> {
    if value.trim().is_empty() {
        return Err(EngineError::InvalidName(format!("{label} must not be empty")));
    }
    if value.trim() != value {
        return Err(EngineError::InvalidName(format!(
            "{label} must not start or end with whitespace"
        )));
    }
    Ok(())
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
