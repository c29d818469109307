//! Trait abstraction for the users client to enable mocking in tests

use super::{UserListResponse, UsersError};
use async_trait::async_trait;

/// Operations the application needs from the users service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersClientTrait: Send + Sync {
    /// `GET /users`
    async fn list_users(&self) -> Result<UserListResponse, UsersError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mock_through_trait_object() {
        let mut mock = MockUsersClientTrait::new();
        mock.expect_list_users()
            .times(1)
            .returning(|| Ok(UserListResponse::from_text(200, "[]")));

        let client: &dyn UsersClientTrait = &mock;
        let response = tokio_test::block_on(client.list_users()).unwrap();

        assert_eq!(response.body, json!([]));
    }
}
