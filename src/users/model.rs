//! Payloads returned by the users service

use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use serde_json::Value;

/// Reply to `GET /users`.
///
/// The body is kept opaque: it is logged as-is and nothing depends on its
/// shape. A body that is not valid JSON is stored as a JSON string.
#[derive(Debug, Clone, PartialEq)]
pub struct UserListResponse {
    pub status: u16,
    pub body: Value,
}

impl UserListResponse {
    /// Build a response from a status code and raw body text
    pub fn from_text(status: u16, text: &str) -> Self {
        let body = serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()));
        Self { status, body }
    }

    /// Users carried in the service envelope `{"data": {"users": [...]}}`,
    /// or `None` when the body has some other shape
    pub fn users(&self) -> Option<Vec<User>> {
        let users = self.body.get("data")?.get("users")?;
        serde_json::from_value(users.clone()).ok()
    }
}

/// A user record as listed by the service
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default, rename = "created_at")]
    pub created_at_raw: Option<String>,
}

impl User {
    /// Creation time; the service formats it as an RFC 2822 date
    pub fn created_at(&self) -> Option<DateTime<FixedOffset>> {
        self.created_at_raw
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc2822(raw).ok())
    }
}
