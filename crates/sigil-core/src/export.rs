//! Export formatters: configuration JSON and the component-usage snippet.
//!
//! Both are pure. The snippet reproduces the widget's documented usage
//! template exactly, including two fields the template pins regardless of
//! the live configuration: `smartAccount: "eip7702"` and the
//! `cornerRadius: "xl"` token. Tests pin both so a change is deliberate.

use std::fmt::Write as _;

use anyhow::{Context, Result};

use crate::config::WidgetConfig;

/// Providers listed in the generated snippet.
const SNIPPET_PROVIDERS: &str = r#"["smartWallet", "metamask", "coinbase"]"#;

/// Serializes the full configuration as pretty-printed JSON.
///
/// Field order follows the declaration order of `WidgetConfig`; nothing
/// is omitted.
pub fn to_json(config: &WidgetConfig) -> Result<String> {
    serde_json::to_string_pretty(config).context("Failed to serialize configuration")
}

/// Renders the component-usage code snippet for the current configuration.
pub fn to_component_snippet(config: &WidgetConfig) -> String {
    let networks = config
        .networks
        .iter()
        .map(|n| format!("\"{}\"", n.to_lowercase()))
        .collect::<Vec<_>>()
        .join(", ");

    let mut out = String::new();
    let _ = writeln!(out, "<SmartWalletAuth");
    let _ = writeln!(out, "  email={{{}}}", config.email);
    let _ = writeln!(out, "  sms={{{}}}", config.sms);
    let _ = writeln!(out, "  social={{{}}}", config.social);
    let _ = writeln!(out, "  passkey={{{}}}", config.passkey);
    let _ = writeln!(out, "  wallets={{{{");
    let _ = writeln!(out, "    smartAccount: \"eip7702\",");
    let _ = writeln!(out, "    external: {},", config.external);
    let _ = writeln!(out, "    providers: {SNIPPET_PROVIDERS}");
    let _ = writeln!(out, "  }}}}");
    let _ = writeln!(out, "  networks={{[{networks}]}}");
    let _ = writeln!(out, "  branding={{{{");
    let _ = writeln!(out, "    theme: \"{}\",", config.theme.display_name());
    let _ = writeln!(out, "    primaryColor: \"{}\",", config.primary_color);
    let _ = writeln!(out, "    cornerRadius: \"xl\"");
    let _ = writeln!(out, "  }}}}");
    let _ = write!(out, "/>");
    out
}
