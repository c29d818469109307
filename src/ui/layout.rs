//! Page shell: heading, separator, content column and status bar

use crate::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Page heading
pub const HEADING: &str = "All Users";

/// Prompt shown when a required field blocks submission
pub const REQUIRED_PROMPT: &str = "Please fill out this field.";

/// Widest the content column grows
const MAX_CONTENT_WIDTH: u16 = 60;

/// Regions of the page
pub struct PageAreas {
    pub heading: Rect,
    pub separator: Rect,
    pub content: Rect,
    pub status: Rect,
}

/// Split the frame into the page regions
pub fn create_layout(area: Rect) -> PageAreas {
    // Reserve bottom line for status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Max(MAX_CONTENT_WIDTH), Constraint::Min(0)])
        .horizontal_margin(2)
        .split(outer[0])[0];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Heading
            Constraint::Length(1), // Separator
            Constraint::Length(1), // Spacing
            Constraint::Min(0),    // Content
        ])
        .split(column);

    PageAreas {
        heading: rows[1],
        separator: rows[2],
        content: rows[4],
        status: outer[1],
    }
}

/// Draw the page heading
pub fn draw_heading(frame: &mut Frame, area: Rect) {
    let heading = Paragraph::new(HEADING).style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(heading, area);
}

/// Draw a horizontal rule across `area`
pub fn draw_separator(frame: &mut Frame, area: Rect) {
    let rule = "─".repeat(area.width as usize);
    frame.render_widget(
        Paragraph::new(rule).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(
        " Tab:next  Enter:signup  ^R:fetch users  Esc:quit",
        Style::default().fg(Color::Gray),
    )];

    if state.invalid_field.is_some() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            REQUIRED_PROMPT,
            Style::default().fg(Color::Yellow),
        ));
    } else if let Some(msg) = &state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
