//! Preset table: named shortcuts that set a cluster of fields at once.

use serde::{Deserialize, Serialize};

use crate::config::{AuthComponent, ConfigPatch};
use crate::order;

/// A named partial configuration covering the auth-method flags and the
/// component order. Applying one is exactly one store update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    #[default]
    Full,
    Simple,
    Wallet,
}

impl Preset {
    /// Returns all presets for iteration (e.g., in the sidebar).
    pub fn all() -> &'static [Preset] {
        &[Preset::Full, Preset::Simple, Preset::Wallet]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Preset::Full => "Full",
            Preset::Simple => "Simple",
            Preset::Wallet => "Wallet",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Preset::Full => "Every sign-in method enabled",
            Preset::Simple => "Email and social only",
            Preset::Wallet => "External wallet only",
        }
    }

    /// Returns the partial update this preset applies, including the
    /// `preset` field itself.
    pub fn patch(&self) -> ConfigPatch {
        let (flags, order): ([bool; 5], Vec<AuthComponent>) = match self {
            Preset::Full => (
                [true, true, true, true, true],
                order::CANONICAL_ORDER.to_vec(),
            ),
            Preset::Simple => (
                [true, false, true, false, false],
                vec![AuthComponent::Email, AuthComponent::Social],
            ),
            Preset::Wallet => (
                [false, false, false, false, true],
                vec![AuthComponent::External],
            ),
        };

        let [email, sms, social, passkey, external] = flags;
        ConfigPatch {
            email: Some(email),
            sms: Some(sms),
            social: Some(social),
            passkey: Some(passkey),
            external: Some(external),
            component_order: Some(order),
            preset: Some(*self),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_preset_enables_everything() {
        let patch = Preset::Full.patch();
        assert_eq!(patch.email, Some(true));
        assert_eq!(patch.sms, Some(true));
        assert_eq!(patch.external, Some(true));
        assert_eq!(
            patch.component_order.as_deref(),
            Some(order::CANONICAL_ORDER.as_slice())
        );
        assert_eq!(patch.preset, Some(Preset::Full));
    }

    #[test]
    fn test_simple_preset_keeps_email_and_social() {
        let patch = Preset::Simple.patch();
        assert_eq!(patch.email, Some(true));
        assert_eq!(patch.sms, Some(false));
        assert_eq!(patch.social, Some(true));
        assert_eq!(patch.passkey, Some(false));
        assert_eq!(patch.external, Some(false));
        assert_eq!(
            patch.component_order,
            Some(vec![AuthComponent::Email, AuthComponent::Social])
        );
    }

    #[test]
    fn test_wallet_preset_is_external_only() {
        let patch = Preset::Wallet.patch();
        assert_eq!(patch.email, Some(false));
        assert_eq!(patch.sms, Some(false));
        assert_eq!(patch.social, Some(false));
        assert_eq!(patch.passkey, Some(false));
        assert_eq!(patch.external, Some(true));
        assert_eq!(patch.component_order, Some(vec![AuthComponent::External]));
    }

    #[test]
    fn test_preset_patches_touch_nothing_else() {
        let patch = Preset::Wallet.patch();
        assert!(patch.theme.is_none());
        assert!(patch.primary_color.is_none());
        assert!(patch.networks.is_none());
        assert!(patch.spending_limit.is_none());
    }
}
