//! UI module for rendering the TUI

mod components;
pub mod forms;
mod layout;

use crate::state::AppState;
use forms::signup_form::{self, SignupFormProps};
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let page = layout::create_layout(frame.area());

    layout::draw_heading(frame, page.heading);
    layout::draw_separator(frame, page.separator);

    let props = SignupFormProps::new(&state.draft, state.focus).with_invalid(state.invalid_field);
    signup_form::draw(frame, page.content, &props);

    layout::draw_status_bar(frame, page.status, state);
}
