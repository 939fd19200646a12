//! Component order model.
//!
//! The ordered list of sign-in blocks and the derived "visible" sequence
//! the preview consumes. Reordering is a pure list splice matching
//! drag-and-drop semantics: remove the moved entry, insert it at the
//! target's post-removal index.

use crate::config::{AuthComponent, WidgetConfig};

/// The canonical block order used by defaults and by order reset.
pub const CANONICAL_ORDER: [AuthComponent; 5] = [
    AuthComponent::Email,
    AuthComponent::Sms,
    AuthComponent::Social,
    AuthComponent::Passkey,
    AuthComponent::External,
];

/// Moves `moved` to the position currently held by `target`.
///
/// Returns the order unchanged when either id is missing or the splice
/// would be a no-op.
pub fn reorder(
    order: &[AuthComponent],
    moved: AuthComponent,
    target: AuthComponent,
) -> Vec<AuthComponent> {
    let Some(from) = order.iter().position(|c| *c == moved) else {
        return order.to_vec();
    };

    let mut next = order.to_vec();
    next.remove(from);

    let Some(to) = next.iter().position(|c| *c == target) else {
        return order.to_vec();
    };

    next.insert(to, moved);
    next
}

/// Filters `order` down to the components whose enabled flag is set.
pub fn visible(order: &[AuthComponent], config: &WidgetConfig) -> Vec<AuthComponent> {
    order
        .iter()
        .copied()
        .filter(|c| c.is_enabled(config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use AuthComponent::{Email, External, Passkey, Sms, Social};

    #[test]
    fn test_reorder_moves_before_target() {
        let order = CANONICAL_ORDER.to_vec();
        let next = reorder(&order, Passkey, Sms);
        assert_eq!(next, vec![Email, Passkey, Sms, Social, External]);
    }

    #[test]
    fn test_reorder_moves_toward_end() {
        let order = CANONICAL_ORDER.to_vec();
        let next = reorder(&order, Email, Passkey);
        assert_eq!(next, vec![Sms, Social, Email, Passkey, External]);
    }

    #[test]
    fn test_reorder_missing_ids_is_noop() {
        let order = vec![Email, Social];
        assert_eq!(reorder(&order, Passkey, Email), order);
        assert_eq!(reorder(&order, Email, Passkey), order);
    }

    #[test]
    fn test_reorder_onto_self_is_noop() {
        let order = CANONICAL_ORDER.to_vec();
        assert_eq!(reorder(&order, Social, Social), order);
    }

    #[test]
    fn test_reorder_round_trip_restores_adjacency() {
        // reorder(reorder(O, a, b), b, a) restores the original adjacency
        // for distinct members already present.
        let order = CANONICAL_ORDER.to_vec();
        for &a in &CANONICAL_ORDER {
            for &b in &CANONICAL_ORDER {
                if a == b {
                    continue;
                }
                let once = reorder(&order, a, b);
                let back = reorder(&once, b, a);
                let pos = |o: &[AuthComponent], c| o.iter().position(|x| *x == c).unwrap();
                let adjacent_before =
                    pos(&order, a).abs_diff(pos(&order, b)) == 1;
                let adjacent_after = pos(&back, a).abs_diff(pos(&back, b)) == 1;
                if adjacent_before {
                    assert!(adjacent_after, "adjacency lost for {a:?}/{b:?}");
                }
            }
        }
    }

    #[test]
    fn test_visible_filters_by_flags_preserving_order() {
        let config = WidgetConfig {
            email: true,
            sms: false,
            social: true,
            passkey: false,
            external: true,
            ..Default::default()
        };

        let shown = visible(&CANONICAL_ORDER, &config);
        assert_eq!(shown, vec![Email, Social, External]);
    }

    #[test]
    fn test_visible_respects_custom_order() {
        let config = WidgetConfig::default(); // sms disabled by default
        let order = vec![External, Passkey, Email, Sms, Social];
        let shown = visible(&order, &config);
        assert_eq!(shown, vec![External, Passkey, Email, Social]);
    }

    #[test]
    fn test_visible_omitted_types_never_render() {
        let config = WidgetConfig::default();
        let order = vec![Email];
        assert_eq!(visible(&order, &config), vec![Email]);
    }
}
