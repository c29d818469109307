//! Signup form field descriptors

/// Input kind of a field, mirroring the HTML `type` of the signup inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
        }
    }
}

/// One of the two inputs of the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupField {
    Username,
    Email,
}

impl SignupField {
    /// All fields in form order
    pub const ALL: [SignupField; 2] = [SignupField::Username, SignupField::Email];

    /// Field name as submitted
    pub fn name(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
        }
    }

    /// Hint rendered while the field is empty
    pub fn placeholder(&self) -> &'static str {
        self.label()
    }

    pub fn kind(&self) -> InputKind {
        match self {
            Self::Username => InputKind::Text,
            Self::Email => InputKind::Email,
        }
    }

    /// Both inputs are required
    pub fn is_required(&self) -> bool {
        true
    }
}

/// An edit applied to the text of a focused input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
}

impl FieldEdit {
    /// Value of the input after this edit
    pub fn apply(&self, current: &str) -> String {
        let mut value = current.to_string();
        match self {
            Self::Insert(c) => value.push(*c),
            Self::Backspace => {
                value.pop();
            }
        }
        value
    }
}
