//! Credentials draft, focus, and the handler capability of the signup form

use super::field::SignupField;

/// In-progress signup input, owned by whoever renders the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CredentialsDraft {
    pub username: String,
    pub email: String,
}

impl CredentialsDraft {
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }

    pub fn value(&self, field: SignupField) -> &str {
        match field {
            SignupField::Username => &self.username,
            SignupField::Email => &self.email,
        }
    }

    pub fn set_value(&mut self, field: SignupField, value: String) {
        match field {
            SignupField::Username => self.username = value,
            SignupField::Email => self.email = value,
        }
    }

    /// First required field (in form order) that is still empty
    pub fn first_missing(&self) -> Option<SignupField> {
        SignupField::ALL
            .into_iter()
            .find(|field| field.is_required() && self.value(*field).is_empty())
    }

    pub fn clear(&mut self) {
        self.username.clear();
        self.email.clear();
    }
}

/// Which control of the form has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Username,
    Email,
    Submit,
}

impl FormFocus {
    const ORDER: [FormFocus; 3] = [FormFocus::Username, FormFocus::Email, FormFocus::Submit];

    fn index(&self) -> usize {
        match self {
            Self::Username => 0,
            Self::Email => 1,
            Self::Submit => 2,
        }
    }

    /// Move to the next control (wraps around)
    pub fn next(&self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Move to the previous control (wraps around)
    pub fn prev(&self) -> Self {
        let count = Self::ORDER.len();
        Self::ORDER[(self.index() + count - 1) % count]
    }

    /// The input under focus, if any
    pub fn field(&self) -> Option<SignupField> {
        match self {
            Self::Username => Some(SignupField::Username),
            Self::Email => Some(SignupField::Email),
            Self::Submit => None,
        }
    }
}

impl From<SignupField> for FormFocus {
    fn from(field: SignupField) -> Self {
        match field {
            SignupField::Username => Self::Username,
            SignupField::Email => Self::Email,
        }
    }
}

/// Callbacks the signup form forwards its events to
pub trait FormHandler {
    /// Called once per keystroke with the field's new value
    fn on_field_change(&mut self, field: SignupField, value: String);

    /// Called once per accepted submission
    fn on_submit(&mut self, draft: &CredentialsDraft);
}
