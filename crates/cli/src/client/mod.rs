use api_types::{
    Message,
    analytics::{CategoryBreakdown, DateRange, MonthlyTotal},
    expense::{ExpenseItem, ExpenseRecord},
    user::{AccessToken, UserCredentials},
};
use chrono::NaiveDate;
use reqwest::Url;
use serde::{Deserialize, de::DeserializeOwned};

use crate::error::{ClientError, Result, error_for_status};

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Credentials of a logged-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Known when the session comes from [`Client::login`].
    pub username: Option<String>,
    pub access_token: String,
}

impl Session {
    /// Resume a session from a token obtained earlier.
    pub fn from_token(access_token: impl Into<String>) -> Self {
        Self {
            username: None,
            access_token: access_token.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    base_url: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let base_url =
            Url::parse(&base_url).map_err(|err| ClientError::InvalidUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            http: reqwest::Client::new(),
        })
    }

    pub async fn register(&self, username: &str, password: &str) -> Result<Message> {
        let res = self
            .http
            .post(self.endpoint("create_user/")?)
            .json(&credentials(username, password))
            .send()
            .await?;
        read_json(res).await
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let res = self
            .http
            .post(self.endpoint("login/")?)
            .json(&credentials(username, password))
            .send()
            .await?;
        let token: AccessToken = read_json(res).await?;

        Ok(Session {
            username: Some(username.to_string()),
            access_token: token.access_token,
        })
    }

    pub async fn expenses_for_date(
        &self,
        session: &Session,
        date: NaiveDate,
    ) -> Result<Vec<ExpenseItem>> {
        let res = self
            .http
            .get(self.endpoint("expenses/")?)
            .query(&[("expense_date", date.to_string())])
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        read_json(res).await
    }

    /// Overwrite the expenses of `date` with `items`; an empty slice clears the day.
    pub async fn replace_expenses(
        &self,
        session: &Session,
        date: NaiveDate,
        items: &[ExpenseItem],
    ) -> Result<Message> {
        let res = self
            .http
            .post(self.endpoint("expenses/")?)
            .query(&[("expense_date", date.to_string())])
            .bearer_auth(&session.access_token)
            .json(items)
            .send()
            .await?;
        read_json(res).await
    }

    pub async fn all_expenses(&self, session: &Session) -> Result<Vec<ExpenseRecord>> {
        let res = self
            .http
            .get(self.endpoint("all_expenses/")?)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        read_json(res).await
    }

    pub async fn category_breakdown(
        &self,
        session: &Session,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<CategoryBreakdown> {
        let res = self
            .http
            .post(self.endpoint("analytics/")?)
            .bearer_auth(&session.access_token)
            .json(&DateRange {
                start_date,
                end_date,
            })
            .send()
            .await?;
        read_json(res).await
    }

    pub async fn monthly_totals(&self, session: &Session) -> Result<Vec<MonthlyTotal>> {
        let res = self
            .http
            .get(self.endpoint("analytics_by_month/")?)
            .bearer_auth(&session.access_token)
            .send()
            .await?;
        read_json(res).await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|err| ClientError::InvalidUrl(err.to_string()))
    }
}

fn credentials(username: &str, password: &str) -> UserCredentials {
    UserCredentials {
        username: username.to_string(),
        password: password.to_string(),
    }
}

async fn read_json<T: DeserializeOwned>(res: reqwest::Response) -> Result<T> {
    if res.status().is_success() {
        return res.json::<T>().await.map_err(ClientError::Transport);
    }

    let status = res.status();
    let message = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.error)
        .unwrap_or_else(|_| "unknown error".to_string());

    Err(error_for_status(status, message))
}
