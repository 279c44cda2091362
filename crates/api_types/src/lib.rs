//! JSON payloads exchanged between the expense server and its clients.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub mod user {
    use super::*;

    /// Body of both `/create_user/` and `/login/`.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct UserCredentials {
        pub username: String,
        pub password: String,
    }

    /// Returned by `/login/`.
    ///
    /// `token_type` is always `"bearer"`.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AccessToken {
        pub access_token: String,
        pub token_type: String,
    }

    impl AccessToken {
        pub fn bearer(access_token: String) -> Self {
            Self {
                access_token,
                token_type: "bearer".to_string(),
            }
        }
    }
}

pub mod expense {
    use super::*;

    /// Query string of `/expenses/`.
    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct ExpenseDateQuery {
        pub expense_date: NaiveDate,
    }

    /// One expense of a single day, as sent and received by `/expenses/`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseItem {
        pub amount: f64,
        pub category: String,
        #[serde(default)]
        pub notes: String,
    }

    /// An expense together with its date, as listed by `/all_expenses/`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseRecord {
        pub expense_date: NaiveDate,
        pub amount: f64,
        pub category: String,
        pub notes: String,
    }
}

pub mod analytics {
    use std::collections::BTreeMap;

    use super::*;

    /// Inclusive date range for `/analytics/`.
    #[derive(Clone, Copy, Debug, Serialize, Deserialize)]
    pub struct DateRange {
        pub start_date: NaiveDate,
        pub end_date: NaiveDate,
    }

    #[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CategoryShare {
        pub total: f64,
        /// Share of the range total, in `0..=100`.
        pub percentage: f64,
    }

    /// Category name to its share, keyed in alphabetical order.
    pub type CategoryBreakdown = BTreeMap<String, CategoryShare>;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct MonthlyTotal {
        /// `YYYY-MM`
        pub month_year: String,
        pub total_amount: f64,
    }
}
