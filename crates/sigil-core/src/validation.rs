//! Field-level validation for partial configuration updates.
//!
//! `validate` is pure and deterministic: it inspects only the fields
//! present in the patch (absent fields are not validated) and collects
//! every applicable error, in rule order. Callers typically surface just
//! the first message.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{AccountType, ConfigPatch};

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid regex"));

static ETH_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("valid regex"));

/// Maximum spending limit accepted by the validator.
pub const SPENDING_LIMIT_MAX: f64 = 1_000_000.0;

/// Maximum corner radius accepted by the validator.
///
/// The branding slider stops at 24, but stored values up to 50 remain
/// valid.
pub const CORNER_RADIUS_MAX: u32 = 50;

/// Result of validating a partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Returns the first error message, if any.
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// Checks a partial configuration update against the field rules.
pub fn validate(patch: &ConfigPatch) -> ValidationReport {
    let mut errors = Vec::new();

    if let Some(color) = &patch.primary_color
        && !HEX_COLOR.is_match(color)
    {
        errors.push("Primary color must be a valid hex color (e.g., #9333EA)".to_string());
    }

    if let Some(radius) = patch.corner_radius
        && radius > CORNER_RADIUS_MAX
    {
        errors.push("Corner radius must be between 0 and 50 pixels".to_string());
    }

    if let Some(limit) = patch.spending_limit {
        if limit < 0.0 {
            errors.push("Spending limit cannot be negative".to_string());
        }
        if limit > SPENDING_LIMIT_MAX {
            errors.push("Spending limit cannot exceed 1,000,000".to_string());
        }
    }

    // Deliberately patch-local: the stored account type is never consulted,
    // so an entry point edited on its own is accepted as-is.
    if let Some(entry_point) = &patch.entry_point
        && patch.account_type == Some(AccountType::Erc4337)
        && !ETH_ADDRESS.is_match(entry_point)
    {
        errors.push("Entry point must be a valid Ethereum address".to_string());
    }

    if let Some(networks) = &patch.networks
        && networks.is_empty()
    {
        errors.push("At least one network must be selected".to_string());
    }

    if let Some(order) = &patch.component_order {
        let unique: HashSet<_> = order.iter().collect();
        if unique.len() != order.len() {
            errors.push("Component order contains duplicates".to_string());
        }
    }

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
