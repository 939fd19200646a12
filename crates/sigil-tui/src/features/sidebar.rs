//! Sidebar: the scrollable settings panel.
//!
//! The row list is derived from the current configuration on every frame,
//! so conditional rows (order entries, the ERC-4337 entry point, the logo
//! file row) appear and disappear as the configuration changes. The
//! cursor indexes into that derived list.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use sigil_core::config::{AuthComponent, WidgetConfig};

use crate::state::AppState;

/// One interactive row in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Preset,
    AuthToggle(AuthComponent),
    OrderEntry(AuthComponent),
    ResetOrder,
    Theme,
    PrimaryColor,
    CornerRadius,
    FontFamily,
    Network(&'static str),
    AccountType,
    EntryPoint,
    Paymaster,
    Persistence,
    Duration,
    Limits,
    SpendingLimit,
    Currency,
    LogoEnabled,
    LogoPath,
    Mode,
    Device,
    AdvancedOptions,
    CopySnippet,
    CopyJson,
}

impl Row {
    /// Section header this row renders under.
    fn section(&self) -> &'static str {
        match self {
            Row::Preset => "Presets",
            Row::AuthToggle(_) => "Sign-in Methods",
            Row::OrderEntry(_) | Row::ResetOrder => "Component Order",
            Row::Theme | Row::PrimaryColor | Row::CornerRadius | Row::FontFamily => "Branding",
            Row::Network(_) => "Networks",
            Row::AccountType | Row::EntryPoint | Row::Paymaster => "Smart Account",
            Row::Persistence | Row::Duration => "Session",
            Row::Limits | Row::SpendingLimit | Row::Currency => "Spending Limits",
            Row::LogoEnabled | Row::LogoPath => "Custom Logo",
            Row::Mode | Row::Device | Row::AdvancedOptions => "Preview",
            Row::CopySnippet | Row::CopyJson => "Export",
        }
    }

    /// Initial buffer contents when this row opens a text edit.
    ///
    /// Rows that are not text-editable return `None`.
    pub fn edit_seed(&self, config: &WidgetConfig) -> Option<String> {
        match self {
            Row::PrimaryColor => Some(config.primary_color.clone()),
            Row::EntryPoint => Some(config.entry_point.clone()),
            Row::SpendingLimit => Some(format_limit(config.spending_limit)),
            Row::Currency => Some(config.spending_limit_currency.clone()),
            Row::LogoPath => Some(String::new()),
            _ => None,
        }
    }
}

/// Formats a spending limit without a trailing `.0` for whole amounts.
pub fn format_limit(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

/// Builds the row list for the current configuration.
///
/// Order entries follow `component_order`; the entry point row only
/// exists for ERC-4337 accounts (matching the panel it mirrors); the
/// logo file row only exists while the custom logo is enabled.
pub fn rows(config: &WidgetConfig) -> Vec<Row> {
    let mut rows = vec![Row::Preset];

    rows.extend(AuthComponent::all().iter().copied().map(Row::AuthToggle));

    rows.extend(config.component_order.iter().copied().map(Row::OrderEntry));
    rows.push(Row::ResetOrder);

    rows.extend([Row::Theme, Row::PrimaryColor, Row::CornerRadius, Row::FontFamily]);

    rows.extend(
        WidgetConfig::AVAILABLE_NETWORKS
            .iter()
            .copied()
            .map(Row::Network),
    );

    rows.push(Row::AccountType);
    if config.account_type == sigil_core::config::AccountType::Erc4337 {
        rows.push(Row::EntryPoint);
    }
    rows.push(Row::Paymaster);

    rows.extend([Row::Persistence, Row::Duration]);
    rows.extend([Row::Limits, Row::SpendingLimit, Row::Currency]);

    rows.push(Row::LogoEnabled);
    if config.custom_logo.enabled {
        rows.push(Row::LogoPath);
    }

    rows.extend([Row::Mode, Row::Device, Row::AdvancedOptions]);
    rows.extend([Row::CopySnippet, Row::CopyJson]);

    rows
}

/// An in-progress text edit on one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub row: Row,
    pub buffer: String,
}

/// Sidebar view state.
#[derive(Debug, Default)]
pub struct SidebarState {
    /// Index into the derived row list.
    pub cursor: usize,
    /// Active text edit, if any.
    pub editing: Option<EditState>,
    /// Order entry currently grabbed for keyboard reordering.
    pub grabbed: Option<AuthComponent>,
}

impl SidebarState {
    /// Moves the cursor by `delta`, clamped to the row list.
    pub fn move_cursor(&mut self, delta: isize, row_count: usize) {
        if row_count == 0 {
            self.cursor = 0;
            return;
        }
        let max = row_count - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(max);
    }

    /// Places the cursor on `row` if it exists in `rows`.
    pub fn focus(&mut self, rows: &[Row], row: Row) {
        if let Some(idx) = rows.iter().position(|r| *r == row) {
            self.cursor = idx;
        }
    }
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn selector(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{label:<14}")),
        Span::styled(format!("‹ {value} ›"), Style::default().fg(Color::Cyan)),
    ])
}

fn truncated_address(address: &str) -> String {
    // The stored value is free-form text, so count characters rather
    // than bytes.
    let count = address.chars().count();
    if count > 14 {
        let head: String = address.chars().take(8).collect();
        let tail: String = address.chars().skip(count - 4).collect();
        format!("{head}…{tail}")
    } else {
        address.to_string()
    }
}

/// Renders one row's label and value.
fn row_line(row: Row, config: &WidgetConfig, state: &SidebarState) -> Line<'static> {
    // An active edit replaces the row's value with the buffer.
    if let Some(edit) = &state.editing {
        if edit.row == row {
            let label = match row {
                Row::PrimaryColor => "Primary color",
                Row::EntryPoint => "Entry point",
                Row::SpendingLimit => "Limit",
                Row::Currency => "Currency",
                Row::LogoPath => "Image file",
                _ => "",
            };
            return Line::from(vec![
                Span::raw(format!("{label:<14}")),
                Span::styled(
                    format!("{}▏", edit.buffer),
                    Style::default().fg(Color::Yellow),
                ),
            ]);
        }
    }

    match row {
        Row::Preset => selector("Preset", config.preset.display_name()),
        Row::AuthToggle(c) => Line::raw(format!(
            "{} {}",
            checkbox(c.is_enabled(config)),
            c.display_name()
        )),
        Row::OrderEntry(c) => {
            let position = config
                .component_order
                .iter()
                .position(|x| *x == c)
                .map_or(0, |i| i + 1);
            let marker = if state.grabbed == Some(c) { "◆" } else { " " };
            let style = if c.is_enabled(config) {
                Style::default()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(
                format!("{marker} {position}. {}", c.display_name()),
                style,
            ))
        }
        Row::ResetOrder => Line::raw("Reset order"),
        Row::Theme => selector("Theme", config.theme.display_name()),
        Row::PrimaryColor => Line::from(vec![
            Span::raw(format!("{:<14}", "Primary color")),
            Span::styled(
                "■ ",
                Style::default().fg(super::preview::parse_hex_color(&config.primary_color)
                    .unwrap_or(Color::White)),
            ),
            Span::raw(config.primary_color.clone()),
        ]),
        Row::CornerRadius => Line::raw(format!(
            "{:<14}{}px",
            "Corner radius", config.corner_radius
        )),
        Row::FontFamily => selector("Font", config.font_family.display_name()),
        Row::Network(name) => Line::raw(format!(
            "{} {name}",
            checkbox(config.networks.iter().any(|n| n == name))
        )),
        Row::AccountType => selector("Account", config.account_type.display_name()),
        Row::EntryPoint => Line::raw(format!(
            "{:<14}{}",
            "Entry point",
            truncated_address(&config.entry_point)
        )),
        Row::Paymaster => Line::raw(format!(
            "{} Sponsor gas (paymaster)",
            checkbox(config.paymaster)
        )),
        Row::Persistence => selector("Persistence", config.persistence.display_name()),
        Row::Duration => selector("Duration", config.duration.display_name()),
        Row::Limits => Line::raw(format!(
            "{} Enable spending limits",
            checkbox(config.limits)
        )),
        Row::SpendingLimit => Line::raw(format!(
            "{:<14}{}",
            "Limit",
            format_limit(config.spending_limit)
        )),
        Row::Currency => Line::raw(format!(
            "{:<14}{}",
            "Currency", config.spending_limit_currency
        )),
        Row::LogoEnabled => Line::raw(format!(
            "{} Custom logo",
            checkbox(config.custom_logo.enabled)
        )),
        Row::LogoPath => {
            let value = if config.custom_logo.data.is_some() {
                "(image set · enter to replace)"
            } else {
                "(enter to choose a file)"
            };
            Line::from(vec![
                Span::raw(format!("{:<14}", "Image file")),
                Span::styled(value, Style::default().fg(Color::DarkGray)),
            ])
        }
        Row::Mode => selector("Mode", config.mode.display_name()),
        Row::Device => selector("Device", config.device.display_name()),
        Row::AdvancedOptions => Line::raw(format!(
            "{} Advanced options",
            checkbox(config.advanced_options)
        )),
        Row::CopySnippet => Line::from(Span::styled(
            "Copy React component",
            Style::default().fg(Color::Magenta),
        )),
        Row::CopyJson => Line::from(Span::styled(
            "Copy JSON",
            Style::default().fg(Color::Magenta),
        )),
    }
}

/// Renders the sidebar into `area`.
pub fn render(state: &AppState, frame: &mut Frame, area: Rect) {
    let config = state.store.config();
    let rows = rows(config);

    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_line = 0;
    let mut section = "";

    for (idx, row) in rows.iter().enumerate() {
        if row.section() != section {
            section = row.section();
            if !lines.is_empty() {
                lines.push(Line::raw(""));
            }
            lines.push(Line::from(Span::styled(
                section,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let selected = idx == state.sidebar.cursor;
        let mut line = row_line(*row, config, &state.sidebar);
        let prefix = if selected { "› " } else { "  " };
        line.spans.insert(0, Span::raw(prefix));
        if selected {
            line = line.style(Style::default().add_modifier(Modifier::BOLD));
            cursor_line = lines.len();
        }
        lines.push(line);
    }

    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = cursor_line.saturating_sub(inner_height.saturating_sub(1).max(1) / 2);

    let block = Block::default().borders(Borders::ALL).title(" Settings ");
    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use sigil_core::config::AccountType;

    use super::*;

    #[test]
    fn test_entry_point_row_only_for_erc4337() {
        let config = WidgetConfig::default();
        assert!(!rows(&config).contains(&Row::EntryPoint));

        let config = WidgetConfig {
            account_type: AccountType::Erc4337,
            ..Default::default()
        };
        assert!(rows(&config).contains(&Row::EntryPoint));
    }

    #[test]
    fn test_logo_path_row_follows_enabled_flag() {
        let config = WidgetConfig::default();
        assert!(!rows(&config).contains(&Row::LogoPath));

        let config = WidgetConfig {
            custom_logo: sigil_core::config::CustomLogo {
                enabled: true,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(rows(&config).contains(&Row::LogoPath));
    }

    #[test]
    fn test_order_entries_follow_component_order() {
        let config = WidgetConfig {
            component_order: vec![AuthComponent::External, AuthComponent::Email],
            ..Default::default()
        };
        let entries: Vec<Row> = rows(&config)
            .into_iter()
            .filter(|r| matches!(r, Row::OrderEntry(_)))
            .collect();
        assert_eq!(
            entries,
            vec![
                Row::OrderEntry(AuthComponent::External),
                Row::OrderEntry(AuthComponent::Email)
            ]
        );
    }

    #[test]
    fn test_cursor_clamps_at_both_ends() {
        let mut state = SidebarState::default();
        state.move_cursor(-3, 10);
        assert_eq!(state.cursor, 0);
        state.move_cursor(100, 10);
        assert_eq!(state.cursor, 9);
    }

    #[test]
    fn test_edit_seed_only_for_text_rows() {
        let config = WidgetConfig::default();
        assert_eq!(
            Row::PrimaryColor.edit_seed(&config).as_deref(),
            Some("#9333EA")
        );
        assert_eq!(
            Row::SpendingLimit.edit_seed(&config).as_deref(),
            Some("1000")
        );
        assert_eq!(Row::Currency.edit_seed(&config).as_deref(), Some("USD"));
        assert!(Row::Theme.edit_seed(&config).is_none());
        assert!(Row::AuthToggle(AuthComponent::Email).edit_seed(&config).is_none());
    }

    #[test]
    fn test_truncated_address_shortens_long_values() {
        assert_eq!(
            truncated_address("0x0000000071727De22E5E9d8BAf0edAc6f37da032"),
            "0x000000…a032"
        );
        assert_eq!(truncated_address("0x1234"), "0x1234");
    }

    #[test]
    fn test_truncated_address_handles_multibyte_text() {
        // The entry point field accepts arbitrary typed text, so the
        // truncation must not split a multibyte character.
        assert_eq!(truncated_address("aαααααααααααααα"), "aααααααα…αααα");
        assert_eq!(truncated_address("ααααααααααααααα"), "αααααααα…αααα");
    }

    #[test]
    fn test_format_limit_trims_whole_amounts() {
        assert_eq!(format_limit(1000.0), "1000");
        assert_eq!(format_limit(12.5), "12.5");
    }
}
