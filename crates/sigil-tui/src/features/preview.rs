//! Live preview: a terminal mock of the generated sign-in widget.
//!
//! UI mode draws the widget inside a device frame sized by the selected
//! device; code mode shows the component snippet instead, mirroring the
//! editor's two surfaces.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use sigil_core::config::{EditorMode, Theme, WidgetConfig};
use sigil_core::{export, order};

use crate::state::AppState;

/// Parses a `#RRGGBB` string into a terminal color.
///
/// Returns `None` for anything that is not six hex digits; callers fall
/// back to a neutral color rather than failing the render.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

/// Renders the preview into `area`.
pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    let config = state.store.config();
    match config.mode {
        EditorMode::Ui => render_widget_mock(config, frame, area),
        EditorMode::Code => render_code(config, frame, area),
    }
}

fn render_code(config: &WidgetConfig, frame: &mut Frame, area: Rect) {
    let snippet = export::to_component_snippet(config);
    let block = Block::default().borders(Borders::ALL).title(" Code ");
    let paragraph = Paragraph::new(snippet).block(block);
    frame.render_widget(paragraph, area);
}

fn render_widget_mock(config: &WidgetConfig, frame: &mut Frame, area: Rect) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" Preview ");
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    // Device frame, centered horizontally.
    let width = config.device.preview_width().min(inner.width);
    let x = inner.x + (inner.width.saturating_sub(width)) / 2;
    let frame_area = Rect::new(x, inner.y + 1, width, inner.height.saturating_sub(2));

    let accent = parse_hex_color(&config.primary_color).unwrap_or(Color::Magenta);
    let (bg, fg) = match config.theme {
        Theme::Dark => (Color::Black, Color::White),
        Theme::Light => (Color::White, Color::Black),
    };

    let mut lines: Vec<Line> = Vec::new();

    if config.custom_logo.enabled {
        let logo = if config.custom_logo.data.is_some() {
            "◆ logo ◆"
        } else {
            "◇ logo ◇"
        };
        lines.push(Line::from(Span::styled(logo, Style::default().fg(accent))).centered());
        lines.push(Line::raw(""));
    }

    if !(config.custom_logo.enabled && config.custom_logo.replace_title) {
        lines.push(
            Line::from(Span::styled(
                "Sign in",
                Style::default().fg(fg).add_modifier(Modifier::BOLD),
            ))
            .centered(),
        );
        lines.push(Line::raw(""));
    }

    for component in order::visible(&config.component_order, config) {
        lines.push(
            Line::from(Span::styled(
                format!("[ {} ]", component.display_name()),
                Style::default().fg(accent),
            ))
            .centered(),
        );
        lines.push(Line::raw(""));
    }

    lines.push(
        Line::from(Span::styled(
            config.networks.join(" · "),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    );
    lines.push(
        Line::from(Span::styled(
            format!(
                "{} · {} · r{}",
                config.account_type.display_name(),
                config.font_family.display_name(),
                config.corner_radius
            ),
            Style::default().fg(Color::DarkGray),
        ))
        .centered(),
    );
    if config.limits {
        lines.push(
            Line::from(Span::styled(
                format!(
                    "limit {} {}",
                    super::sidebar::format_limit(config.spending_limit),
                    config.spending_limit_currency
                ),
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
        );
    }

    let device = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " {} · {} ",
            config.device.display_name(),
            config.theme.display_name()
        ))
        .title_alignment(Alignment::Center)
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines).block(device);
    frame.render_widget(paragraph, frame_area);
}
