//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a single-line text input.
///
/// `value` is rendered verbatim. While it is empty the placeholder is shown
/// instead, dimmed. An active input scrolls horizontally so the end of the
/// value and the cursor stay visible. An invalid input keeps a red border
/// until it is edited.
pub fn draw_input(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    is_active: bool,
    is_invalid: bool,
) {
    let border_style = if is_invalid {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = if value.is_empty() {
        vec![Span::styled(
            placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![Span::raw(value)]
    };

    // The cursor sits after the value, or at the start when showing the placeholder
    if is_active {
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        if value.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }

    let block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);

    let line = Line::from(spans);
    let offset = if is_active {
        let inner_width = area.width.saturating_sub(2) as usize;
        line.width().saturating_sub(inner_width)
    } else {
        0
    };
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);

    frame.render_widget(
        Paragraph::new(line).block(block).scroll((0, offset)),
        area,
    );
}
