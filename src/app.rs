//! Application root: owns the signup draft and triggers user list fetches

use crate::config::ClientConfig;
use crate::state::{AppState, FormFocus};
use crate::ui::forms::signup_form::{self, FormEvent, SignupFormProps};
use crate::users::{self, UsersClient, UsersClientTrait};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Users service client
    client: Arc<dyn UsersClientTrait>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create an App talking to the users service described by `config`
    pub fn new(config: &ClientConfig) -> Self {
        tracing::info!(base_url = %config.base_url, "Using users service");
        Self::with_client(Arc::new(UsersClient::new(config)))
    }

    /// Create an App around an existing client
    pub fn with_client(client: Arc<dyn UsersClientTrait>) -> Self {
        Self {
            state: AppState::default(),
            client,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Start one user list request in the background.
    ///
    /// The outcome only reaches the diagnostic log; the render state is not
    /// touched.
    pub fn fetch_users(&self) -> JoinHandle<()> {
        let client = Arc::clone(&self.client);
        tokio::spawn(async move { users::fetch_users(client.as_ref()).await })
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.quit = true;
                return;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.fetch_users();
                return;
            }
            _ => {}
        }

        // Form callbacks mutate the state, so render props from a snapshot
        let draft = self.state.draft.clone();
        let props = SignupFormProps::new(&draft, self.state.focus);

        match signup_form::handle_key(&props, key, &mut self.state) {
            FormEvent::FocusMoved(focus) => self.state.focus = focus,
            FormEvent::Blocked(field) => {
                self.state.invalid_field = Some(field);
                self.state.focus = FormFocus::from(field);
            }
            FormEvent::Changed(_) => self.state.status_message = None,
            FormEvent::Submitted | FormEvent::Ignored => {}
        }
    }
}
