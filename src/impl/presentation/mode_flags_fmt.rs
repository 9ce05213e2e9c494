use std::sync::LazyLock;

use regex::Regex;

use crate::entities::{FlagLabelStyle, ModeFlags};

static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])").expect("hardcoded regex should be valid"));

/// Comma-joined keys of the flags that are set, in declaration order. Empty
/// when no flag is set; callers decide how to render "none".
pub fn format_true_flags<F: ModeFlags + ?Sized>(flags: &F) -> String {
    format_true_flags_with(flags, FlagLabelStyle::Key)
}

pub fn format_true_flags_with<F: ModeFlags + ?Sized>(flags: &F, style: FlagLabelStyle) -> String {
    flags
        .flags()
        .into_iter()
        .filter(|(_, set)| *set)
        .map(|(key, _)| match style {
            FlagLabelStyle::Key => key.to_string(),
            FlagLabelStyle::Humanized => humanize(key),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split a camelCase key into words, keeping the original casing.
fn humanize(key: &str) -> String {
    UPPERCASE.replace_all(key, " $1").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{ModeOfService, ModeOfTransport};

    #[test]
    fn lists_set_flags_in_declaration_order() {
        let transport = ModeOfTransport {
            air: true,
            land: false,
            sea: true,
        };
        assert_eq!(format_true_flags(&transport), "air, sea");
    }

    #[test]
    fn ad_hoc_flags_keep_their_order() {
        let flags = [("sea", true), ("air", true), ("land", false)];
        assert_eq!(format_true_flags(&flags[..]), "sea, air");
    }

    #[test]
    fn no_set_flags_is_empty() {
        assert_eq!(format_true_flags(&ModeOfTransport::default()), "");
        assert_eq!(format_true_flags(&ModeOfService::default()), "");
    }

    #[test]
    fn humanized_labels_split_camel_case() {
        let service = ModeOfService {
            door_door: true,
            pier_pier: true,
            ..Default::default()
        };
        assert_eq!(format_true_flags(&service), "doorDoor, pierPier");
        assert_eq!(
            format_true_flags_with(&service, FlagLabelStyle::Humanized),
            "door Door, pier Pier"
        );
    }

    #[test]
    fn humanized_labels_are_stable_across_calls() {
        let flags = [("doorPier", true), ("pierDoor", true)];
        for _ in 0..3 {
            assert_eq!(
                format_true_flags_with(&flags[..], FlagLabelStyle::Humanized),
                "door Pier, pier Door"
            );
        }
    }
}
