//! User list fetch: one request, outcome written to the diagnostic log

use super::{User, UsersClientTrait};

/// Request the user list once and log the outcome.
///
/// Failures are logged and absorbed; nothing is retried or returned.
pub async fn fetch_users(client: &dyn UsersClientTrait) {
    match client.list_users().await {
        Ok(response) => {
            let users = response.users();
            let newest = users
                .as_ref()
                .and_then(|users| users.iter().filter_map(User::created_at).max());
            tracing::info!(
                status = response.status,
                users = ?users.as_ref().map(Vec::len),
                newest = ?newest,
                body = %response.body,
                "Fetched user list"
            );
        }
        Err(err) => {
            tracing::error!(error = %err, "Failed to fetch user list");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::users::{MockUsersClientTrait, UserListResponse, UsersClient, UsersError};
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    /// In-memory sink for formatted log lines
    #[derive(Clone, Default)]
    pub(crate) struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        /// Install a subscriber writing into this buffer on the current thread
        pub(crate) fn install(&self) -> tracing::subscriber::DefaultGuard {
            let subscriber = tracing_subscriber::fmt()
                .with_writer(self.clone())
                .with_ansi(false)
                .with_max_level(tracing::Level::INFO)
                .finish();
            tracing::subscriber::set_default(subscriber)
        }

        pub(crate) fn lines_containing(&self, needle: &str) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .filter(|line| line.contains(needle))
                .map(str::to_string)
                .collect()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[tokio::test]
    async fn test_fetch_logs_response_once() {
        let logs = LogBuffer::default();
        let _guard = logs.install();

        let mut mock = MockUsersClientTrait::new();
        mock.expect_list_users()
            .times(1)
            .returning(|| Ok(UserListResponse::from_text(200, r#"{"users": []}"#)));

        fetch_users(&mock).await;

        let lines = logs.lines_containing("Fetched user list");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(r#"{"users":[]}"#));
        assert!(logs.lines_containing("Failed to fetch").is_empty());
    }

    #[tokio::test]
    async fn test_fetch_logs_error_once() {
        let logs = LogBuffer::default();
        let _guard = logs.install();

        let mut mock = MockUsersClientTrait::new();
        mock.expect_list_users().times(1).returning(|| {
            Err(UsersError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            })
        });

        fetch_users(&mock).await;

        let lines = logs.lines_containing("Failed to fetch user list");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("500"));
        assert!(logs.lines_containing("Fetched user list").is_empty());
    }

    #[tokio::test]
    async fn test_fetch_against_http_200() {
        let logs = LogBuffer::default();
        let _guard = logs.install();

        let mut server = mockito::Server::new_async().await;
        let endpoint = server
            .mock("GET", "/users")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"users": []}"#)
            .expect(1)
            .create_async()
            .await;

        let client = UsersClient::new(&ClientConfig {
            base_url: server.url(),
        });
        fetch_users(&client).await;

        endpoint.assert_async().await;
        let lines = logs.lines_containing("Fetched user list");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(r#"{"users":[]}"#));
    }

    #[tokio::test]
    async fn test_fetch_against_http_500_does_not_propagate() {
        let logs = LogBuffer::default();
        let _guard = logs.install();

        let mut server = mockito::Server::new_async().await;
        let endpoint = server
            .mock("GET", "/users")
            .with_status(500)
            .with_body(r#"{"status": "error"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = UsersClient::new(&ClientConfig {
            base_url: server.url(),
        });
        fetch_users(&client).await;

        endpoint.assert_async().await;
        let lines = logs.lines_containing("Failed to fetch user list");
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("500"));
        assert!(logs.lines_containing("Fetched user list").is_empty());
    }
}
