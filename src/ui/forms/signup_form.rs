//! Signup form component
//!
//! Stateless: the caller owns the draft and focus and passes them in as
//! props. Rendering is a pure function of the props, and key handling only
//! forwards changes and submissions to the caller's [`FormHandler`].

use super::field_renderer::draw_input;
use crate::state::{CredentialsDraft, FieldEdit, FormFocus, FormHandler, SignupField};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Label of the submit control
pub const SUBMIT_LABEL: &str = "Signup";

/// Height of one bordered input
const INPUT_HEIGHT: u16 = 3;

/// Everything the form needs from its owner
#[derive(Debug, Clone, Copy)]
pub struct SignupFormProps<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub focus: FormFocus,
    /// Field the host flagged after a blocked submit
    pub invalid: Option<SignupField>,
}

impl<'a> SignupFormProps<'a> {
    pub fn new(draft: &'a CredentialsDraft, focus: FormFocus) -> Self {
        Self {
            username: &draft.username,
            email: &draft.email,
            focus,
            invalid: None,
        }
    }

    pub fn with_invalid(mut self, invalid: Option<SignupField>) -> Self {
        self.invalid = invalid;
        self
    }

    fn value(&self, field: SignupField) -> &'a str {
        match field {
            SignupField::Username => self.username,
            SignupField::Email => self.email,
        }
    }
}

/// What a key press did to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Key not handled by the form
    Ignored,
    /// `on_field_change` was called for this field
    Changed(SignupField),
    /// The owner should move focus here
    FocusMoved(FormFocus),
    /// `on_submit` was called
    Submitted,
    /// Submission refused because this required field is empty
    Blocked(SignupField),
}

/// Draw the form: two labeled inputs and the submit button
pub fn draw(frame: &mut Frame, area: Rect, props: &SignupFormProps) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INPUT_HEIGHT),  // Username
            Constraint::Length(INPUT_HEIGHT),  // Email
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .split(area);

    for (idx, field) in SignupField::ALL.into_iter().enumerate() {
        draw_input(
            frame,
            chunks[idx],
            field.label(),
            props.value(field),
            field.placeholder(),
            props.focus.field() == Some(field),
            props.invalid == Some(field),
        );
    }

    render_button(
        frame,
        chunks[2],
        SUBMIT_LABEL,
        props.focus == FormFocus::Submit,
    );
}

/// Route a key press through the form.
///
/// Each edit of a focused input calls `on_field_change` exactly once with the
/// new value. Enter, or Space on the button, submits; a submit with an empty
/// required field never reaches the handler.
pub fn handle_key(
    props: &SignupFormProps,
    key: KeyEvent,
    handler: &mut dyn FormHandler,
) -> FormEvent {
    if key.kind != KeyEventKind::Press {
        return FormEvent::Ignored;
    }

    match key.code {
        KeyCode::Enter => submit(props, handler),
        KeyCode::Tab | KeyCode::Down => FormEvent::FocusMoved(props.focus.next()),
        KeyCode::BackTab | KeyCode::Up => FormEvent::FocusMoved(props.focus.prev()),
        KeyCode::Char(' ') if props.focus == FormFocus::Submit => submit(props, handler),
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            edit(props, FieldEdit::Insert(c), handler)
        }
        KeyCode::Backspace => edit(props, FieldEdit::Backspace, handler),
        _ => FormEvent::Ignored,
    }
}

fn edit(props: &SignupFormProps, edit: FieldEdit, handler: &mut dyn FormHandler) -> FormEvent {
    let Some(field) = props.focus.field() else {
        return FormEvent::Ignored;
    };
    let current = props.value(field);
    let value = edit.apply(current);
    // Backspace on an empty input changes nothing and fires nothing
    if value == current {
        return FormEvent::Ignored;
    }
    handler.on_field_change(field, value);
    FormEvent::Changed(field)
}

fn submit(props: &SignupFormProps, handler: &mut dyn FormHandler) -> FormEvent {
    let draft = CredentialsDraft::new(props.username, props.email);
    if let Some(missing) = draft.first_missing() {
        tracing::debug!(field = missing.name(), "Submit blocked by required field");
        return FormEvent::Blocked(missing);
    }
    handler.on_submit(&draft);
    FormEvent::Submitted
}
