//! Issue tag catalogue

/// A selectable support tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// All tags in display order. The first entry is the default.
pub static TAG_OPTIONS: &[TagOption] = &[
    TagOption {
        value: "general-issue",
        label: "General issue",
    },
    TagOption {
        value: "major-issue",
        label: "Major issue",
    },
    TagOption {
        value: "feature-request",
        label: "Feature request",
    },
];

/// Value of the default tag
pub fn default_tag() -> &'static str {
    TAG_OPTIONS[0].value
}

/// Human-readable label for a tag value, falling back to the raw value
pub fn tag_label(value: &str) -> &str {
    TAG_OPTIONS
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label)
        .unwrap_or(value)
}

/// Position of a tag value in the catalogue
fn tag_index(value: &str) -> Option<usize> {
    TAG_OPTIONS.iter().position(|option| option.value == value)
}

/// Next tag value (wraps around). Unknown values restart at the first option.
pub fn next_tag(value: &str) -> &'static str {
    match tag_index(value) {
        Some(idx) => TAG_OPTIONS[(idx + 1) % TAG_OPTIONS.len()].value,
        None => default_tag(),
    }
}

/// Previous tag value (wraps around). Unknown values restart at the first option.
pub fn prev_tag(value: &str) -> &'static str {
    match tag_index(value) {
        Some(0) => TAG_OPTIONS[TAG_OPTIONS.len() - 1].value,
        Some(idx) => TAG_OPTIONS[idx - 1].value,
        None => default_tag(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_option() {
        assert_eq!(default_tag(), "general-issue");
    }

    #[test]
    fn test_known_labels() {
        assert_eq!(tag_label("general-issue"), "General issue");
        assert_eq!(tag_label("major-issue"), "Major issue");
        assert_eq!(tag_label("feature-request"), "Feature request");
    }

    #[test]
    fn test_unknown_label_falls_back_to_value() {
        assert_eq!(tag_label("billing"), "billing");
        assert_eq!(tag_label(""), "");
    }

    #[test]
    fn test_next_tag_wraps() {
        assert_eq!(next_tag("general-issue"), "major-issue");
        assert_eq!(next_tag("major-issue"), "feature-request");
        assert_eq!(next_tag("feature-request"), "general-issue");
    }

    #[test]
    fn test_prev_tag_wraps() {
        assert_eq!(prev_tag("general-issue"), "feature-request");
        assert_eq!(prev_tag("feature-request"), "major-issue");
    }

    #[test]
    fn test_cycling_from_unknown_value_recovers() {
        assert_eq!(next_tag("bogus"), "general-issue");
        assert_eq!(prev_tag("bogus"), "general-issue");
    }
}
