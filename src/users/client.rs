//! HTTP client for the users service
//!
//! Thin wrapper around `reqwest` that knows the service's routes. Requests
//! use the client defaults for headers and timeouts.

use super::{UserListResponse, UsersClientTrait, UsersError};
use crate::config::ClientConfig;
use async_trait::async_trait;

/// Client for the users service
#[derive(Debug, Clone)]
pub struct UsersClient {
    http: reqwest::Client,
    base_url: String,
}

impl UsersClient {
    /// Create a client for the service at `config.base_url`
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Full URL of the user list route
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

#[async_trait]
impl UsersClientTrait for UsersClient {
    async fn list_users(&self) -> Result<UserListResponse, UsersError> {
        let url = self.users_url();
        tracing::debug!("GET {url}");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(UsersError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(UserListResponse::from_text(status.as_u16(), &text))
    }
}
