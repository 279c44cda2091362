//! Persistence layer of the expense tracker.
//!
//! [`Engine`] wraps the database connection and exposes the operations the
//! HTTP layer needs: user registration and credential checks, per-day expense
//! listing and replacement, and the spending aggregates.

pub use analytics::{CategoryTotal, MonthlyTotal};
pub use error::EngineError;
pub use expenses::{Expense, NewExpense};
pub use ops::{Engine, EngineBuilder};
pub use users::User;

mod analytics;
mod error;
mod expenses;
mod ops;
mod password;
mod users;

type ResultEngine<T> = Result<T, EngineError>;
