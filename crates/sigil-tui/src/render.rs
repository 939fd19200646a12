//! Top-level render: sidebar | preview, status line, toast overlay.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Clear, Paragraph};

use crate::features::{preview, sidebar};
use crate::state::AppState;

/// Sidebar width in columns.
const SIDEBAR_WIDTH: u16 = 44;

/// Renders the whole frame.
pub fn render(state: &AppState, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());
    let (main, status) = (chunks[0], chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(main);

    sidebar::render(state, frame, columns[0]);
    preview::render(state, frame, columns[1]);
    render_status_line(state, frame, status);
    render_toast(state, frame, main);
}

fn render_status_line(state: &AppState, frame: &mut Frame, area: Rect) {
    let hints = if state.sidebar.editing.is_some() {
        "enter save · esc cancel"
    } else if state.sidebar.grabbed.is_some() {
        "↑/↓ move · enter/g drop · esc cancel"
    } else {
        "j/k move · enter toggle · h/l adjust · g grab · r reset order · 1-3 presets · y/Y copy · q quit"
    };

    let line = Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    frame.render_widget(line, area);
}

/// Draws the current toast in the bottom-right corner of the main area.
fn render_toast(state: &AppState, frame: &mut Frame, area: Rect) {
    let Some(toast) = state.toast.current() else {
        return;
    };

    let width = (toast.message.chars().count() as u16 + 4).min(area.width);
    let toast_area = Rect::new(
        area.right().saturating_sub(width + 1),
        area.bottom().saturating_sub(2),
        width,
        1,
    );

    let paragraph = Paragraph::new(Span::styled(
        format!(" {} ", toast.message),
        Style::default()
            .fg(Color::Black)
            .bg(toast.severity.color())
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(paragraph, toast_area);
}
