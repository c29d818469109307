//! Application state definitions

use super::forms::{CredentialsDraft, FormFocus, FormHandler, SignupField};

/// State owned by the application root
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Signup input not yet submitted
    pub draft: CredentialsDraft,
    /// Focused control of the signup form
    pub focus: FormFocus,
    /// Field flagged by the last blocked submit
    pub invalid_field: Option<SignupField>,
    /// Transient message for the status bar
    pub status_message: Option<String>,
}

impl FormHandler for AppState {
    fn on_field_change(&mut self, field: SignupField, value: String) {
        tracing::trace!(
            field = field.name(),
            kind = field.kind().as_str(),
            "Field changed"
        );
        if self.invalid_field == Some(field) && !value.is_empty() {
            self.invalid_field = None;
        }
        self.draft.set_value(field, value);
    }

    fn on_submit(&mut self, draft: &CredentialsDraft) {
        tracing::info!(
            username = %draft.username,
            email = %draft.email,
            "Signup submitted"
        );
        self.status_message = Some(format!("Submitted signup for {}", draft.username));
        self.invalid_field = None;
        self.draft.clear();
        self.focus = FormFocus::Username;
    }
}
