//! Widget configuration model.
//!
//! `WidgetConfig` is the single record describing the generated sign-in
//! widget; `ConfigPatch` is the partial-update form used for every
//! mutation. Both serialize camelCase to stay byte-compatible with the
//! widget's persisted JSON layout.

use serde::{Deserialize, Serialize};

/// One of the five selectable sign-in method blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthComponent {
    Email,
    Sms,
    Social,
    Passkey,
    External,
}

impl AuthComponent {
    /// Returns all components in canonical order.
    pub fn all() -> &'static [AuthComponent] {
        &[
            AuthComponent::Email,
            AuthComponent::Sms,
            AuthComponent::Social,
            AuthComponent::Passkey,
            AuthComponent::External,
        ]
    }

    /// Returns the display name shown in the sidebar and preview.
    pub fn display_name(&self) -> &'static str {
        match self {
            AuthComponent::Email => "Email",
            AuthComponent::Sms => "SMS",
            AuthComponent::Social => "Social Login",
            AuthComponent::Passkey => "Passkey",
            AuthComponent::External => "External Wallet",
        }
    }

    /// Returns whether this component's enabled flag is set in `config`.
    pub fn is_enabled(&self, config: &WidgetConfig) -> bool {
        match self {
            AuthComponent::Email => config.email,
            AuthComponent::Sms => config.sms,
            AuthComponent::Social => config.social,
            AuthComponent::Passkey => config.passkey,
            AuthComponent::External => config.external,
        }
    }
}

/// Editor surface the user is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Ui,
    Code,
}

impl EditorMode {
    pub fn all() -> &'static [EditorMode] {
        &[EditorMode::Ui, EditorMode::Code]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EditorMode::Ui => "UI",
            EditorMode::Code => "Code",
        }
    }
}

/// Widget color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::Dark, Theme::Light]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// Device frame used by the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceFrame {
    #[default]
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceFrame {
    pub fn all() -> &'static [DeviceFrame] {
        &[
            DeviceFrame::Mobile,
            DeviceFrame::Tablet,
            DeviceFrame::Desktop,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DeviceFrame::Mobile => "Mobile",
            DeviceFrame::Tablet => "Tablet",
            DeviceFrame::Desktop => "Desktop",
        }
    }

    /// Preview frame width in terminal columns.
    pub fn preview_width(&self) -> u16 {
        match self {
            DeviceFrame::Mobile => 36,
            DeviceFrame::Tablet => 52,
            DeviceFrame::Desktop => 72,
        }
    }
}

/// Smart account implementation backing the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[default]
    Eip7702,
    Erc4337,
    Safe,
    Argent,
}

impl AccountType {
    pub fn all() -> &'static [AccountType] {
        &[
            AccountType::Eip7702,
            AccountType::Erc4337,
            AccountType::Safe,
            AccountType::Argent,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AccountType::Eip7702 => "EIP-7702",
            AccountType::Erc4337 => "ERC-4337",
            AccountType::Safe => "Safe",
            AccountType::Argent => "Argent",
        }
    }
}

/// Where the session key is persisted on the user's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum PersistenceMode {
    #[default]
    Device,
    Session,
    LocalStorage,
}

impl PersistenceMode {
    pub fn all() -> &'static [PersistenceMode] {
        &[
            PersistenceMode::Device,
            PersistenceMode::Session,
            PersistenceMode::LocalStorage,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PersistenceMode::Device => "Device",
            PersistenceMode::Session => "Session",
            PersistenceMode::LocalStorage => "Local Storage",
        }
    }
}

/// Session lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionDuration {
    #[default]
    #[serde(rename = "1hour")]
    OneHour,
    #[serde(rename = "24hours")]
    Day,
    #[serde(rename = "7days")]
    Week,
    #[serde(rename = "30days")]
    Month,
    #[serde(rename = "permanent")]
    Permanent,
}

impl SessionDuration {
    pub fn all() -> &'static [SessionDuration] {
        &[
            SessionDuration::OneHour,
            SessionDuration::Day,
            SessionDuration::Week,
            SessionDuration::Month,
            SessionDuration::Permanent,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SessionDuration::OneHour => "1 Hour",
            SessionDuration::Day => "24 Hours",
            SessionDuration::Week => "7 Days",
            SessionDuration::Month => "30 Days",
            SessionDuration::Permanent => "Permanent",
        }
    }
}

/// Named fonts offered by the branding panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    Inter,
    Roboto,
    Poppins,
    Montserrat,
    #[serde(rename = "Open Sans")]
    OpenSans,
}

impl FontFamily {
    pub fn all() -> &'static [FontFamily] {
        &[
            FontFamily::Inter,
            FontFamily::Roboto,
            FontFamily::Poppins,
            FontFamily::Montserrat,
            FontFamily::OpenSans,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter",
            FontFamily::Roboto => "Roboto",
            FontFamily::Poppins => "Poppins",
            FontFamily::Montserrat => "Montserrat",
            FontFamily::OpenSans => "Open Sans",
        }
    }
}

/// Logo size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
    Custom,
}

/// Logo entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogoAnimation {
    None,
    #[default]
    Fade,
    Slide,
    Zoom,
}

/// Spacing around the custom logo, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoSpacing {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl Default for LogoSpacing {
    fn default() -> Self {
        Self {
            top: 0,
            bottom: 16,
            left: 0,
            right: 0,
        }
    }
}

/// Drop shadow behind the custom logo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogoShadow {
    pub enabled: bool,
    pub color: String,
    pub blur: u32,
    pub offset_x: i32,
    pub offset_y: i32,
}

impl Default for LogoShadow {
    fn default() -> Self {
        Self {
            enabled: false,
            color: "#000000".to_string(),
            blur: 4,
            offset_x: 0,
            offset_y: 2,
        }
    }
}

/// Custom logo block shown above the widget title.
///
/// Numeric sub-fields are range-limited by the editing UI only; the
/// shared validator does not inspect them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomLogo {
    pub enabled: bool,
    pub replace_title: bool,
    /// Data-URL string produced by the file upload, if any.
    pub data: Option<String>,
    pub size: LogoSize,
    /// Pixel size used when `size` is `Custom`.
    pub custom_size: u32,
    pub maintain_aspect_ratio: bool,
    /// 0-100.
    pub opacity: u32,
    pub border_radius: u32,
    pub spacing: LogoSpacing,
    pub shadow: LogoShadow,
    pub animation: LogoAnimation,
}

impl Default for CustomLogo {
    fn default() -> Self {
        Self {
            enabled: false,
            replace_title: false,
            data: None,
            size: LogoSize::default(),
            custom_size: 48,
            maintain_aspect_ratio: true,
            opacity: 100,
            border_radius: 0,
            spacing: LogoSpacing::default(),
            shadow: LogoShadow::default(),
            animation: LogoAnimation::default(),
        }
    }
}

/// The complete set of user-chosen widget options.
///
/// Field order is the serialization order of the exported JSON; do not
/// reorder without considering the export format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    pub email: bool,
    pub sms: bool,
    pub social: bool,
    pub passkey: bool,
    pub external: bool,
    pub limits: bool,
    pub mode: EditorMode,
    pub preset: crate::presets::Preset,
    pub theme: Theme,
    pub primary_color: String,
    pub networks: Vec<String>,
    pub device: DeviceFrame,
    pub advanced_options: bool,
    pub component_order: Vec<AuthComponent>,
    pub account_type: AccountType,
    pub entry_point: String,
    pub paymaster: bool,
    pub persistence: PersistenceMode,
    pub duration: SessionDuration,
    pub spending_limit: f64,
    pub spending_limit_currency: String,
    pub corner_radius: u32,
    pub font_family: FontFamily,
    pub custom_logo: CustomLogo,
}

impl WidgetConfig {
    /// Networks offered by the network picker.
    pub const AVAILABLE_NETWORKS: &'static [&'static str] = &["Hyperion", "Base", "Mantle"];
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            email: true,
            sms: false,
            social: true,
            passkey: true,
            external: true,
            limits: true,
            mode: EditorMode::Ui,
            preset: crate::presets::Preset::Full,
            theme: Theme::Dark,
            primary_color: "#9333EA".to_string(),
            networks: vec!["Hyperion".to_string()],
            device: DeviceFrame::Mobile,
            advanced_options: false,
            component_order: crate::order::CANONICAL_ORDER.to_vec(),
            account_type: AccountType::Eip7702,
            entry_point: "0x0000000071727De22E5E9d8BAf0edAc6f37da032".to_string(),
            paymaster: false,
            persistence: PersistenceMode::Device,
            duration: SessionDuration::OneHour,
            spending_limit: 1000.0,
            spending_limit_currency: "USD".to_string(),
            corner_radius: 12,
            font_family: FontFamily::Inter,
            custom_logo: CustomLogo::default(),
        }
    }
}

/// A partial configuration update: only the fields being changed.
///
/// Merging is a shallow field-by-field overwrite; `networks` and
/// `component_order` replace the old value wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passkey: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<EditorMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<crate::presets::Preset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<DeviceFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_options: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_order: Option<Vec<AuthComponent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_point: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paymaster: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persistence: Option<PersistenceMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<SessionDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spending_limit: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spending_limit_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamily>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_logo: Option<CustomLogo>,
}

impl ConfigPatch {
    /// Shallow-merges this patch into `config`, overwriting present fields.
    pub fn merge_into(&self, config: &mut WidgetConfig) {
        if let Some(v) = self.email {
            config.email = v;
        }
        if let Some(v) = self.sms {
            config.sms = v;
        }
        if let Some(v) = self.social {
            config.social = v;
        }
        if let Some(v) = self.passkey {
            config.passkey = v;
        }
        if let Some(v) = self.external {
            config.external = v;
        }
        if let Some(v) = self.limits {
            config.limits = v;
        }
        if let Some(v) = self.mode {
            config.mode = v;
        }
        if let Some(v) = self.preset {
            config.preset = v;
        }
        if let Some(v) = self.theme {
            config.theme = v;
        }
        if let Some(v) = &self.primary_color {
            config.primary_color = v.clone();
        }
        if let Some(v) = &self.networks {
            config.networks = v.clone();
        }
        if let Some(v) = self.device {
            config.device = v;
        }
        if let Some(v) = self.advanced_options {
            config.advanced_options = v;
        }
        if let Some(v) = &self.component_order {
            config.component_order = v.clone();
        }
        if let Some(v) = self.account_type {
            config.account_type = v;
        }
        if let Some(v) = &self.entry_point {
            config.entry_point = v.clone();
        }
        if let Some(v) = self.paymaster {
            config.paymaster = v;
        }
        if let Some(v) = self.persistence {
            config.persistence = v;
        }
        if let Some(v) = self.duration {
            config.duration = v;
        }
        if let Some(v) = self.spending_limit {
            config.spending_limit = v;
        }
        if let Some(v) = &self.spending_limit_currency {
            config.spending_limit_currency = v.clone();
        }
        if let Some(v) = self.corner_radius {
            config.corner_radius = v;
        }
        if let Some(v) = self.font_family {
            config.font_family = v;
        }
        if let Some(v) = &self.custom_logo {
            config.custom_logo = v.clone();
        }
    }
}

pub mod paths {
    //! Path resolution for Sigil state directories.
    //!
    //! SIGIL_HOME resolution order:
    //! 1. SIGIL_HOME environment variable (if set)
    //! 2. ~/.config/sigil (default)

    use std::path::PathBuf;

    /// Returns the Sigil home directory.
    pub fn sigil_home() -> PathBuf {
        if let Ok(home) = std::env::var("SIGIL_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("sigil"))
            .expect("Could not determine home directory")
    }

    /// Returns the key-value storage directory.
    pub fn storage_dir() -> PathBuf {
        sigil_home().join("storage")
    }

    /// Returns the log directory.
    pub fn logs_dir() -> PathBuf {
        sigil_home().join("logs")
    }
}
