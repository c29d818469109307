//! Users service module: HTTP client, payloads and the logged list fetch

mod client;
mod error;
mod fetch;
mod model;
mod traits;

pub use client::UsersClient;
pub use error::UsersError;
pub use fetch::fetch_users;
pub use model::{User, UserListResponse};
pub use traits::UsersClientTrait;

#[cfg(test)]
pub(crate) use fetch::tests::LogBuffer;
#[cfg(test)]
pub use traits::MockUsersClientTrait;
