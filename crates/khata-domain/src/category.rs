//! Suggested grouping labels for new entries.
//!
//! Categories are free text on the wire; this set only seeds pickers and
//! user preferences. Validation elsewhere requires a non-empty label, never
//! membership here.

pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Food",
    "Rent",
    "Travel",
    "Shopping",
    "Bills",
    "Health",
    "Work",
    "Other",
];

/// Owned copy of the suggested labels, for user-extensible settings.
pub fn default_category_labels() -> Vec<String> {
    SUGGESTED_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

pub fn is_suggested(label: &str) -> bool {
    let trimmed = label.trim();
    SUGGESTED_CATEGORIES
        .iter()
        .any(|candidate| candidate.eq_ignore_ascii_case(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestion_check_ignores_case_and_whitespace() {
        assert!(is_suggested(" food "));
        assert!(is_suggested("Work"));
        assert!(!is_suggested("Yacht"));
    }

    #[test]
    fn default_labels_mirror_the_suggested_set() {
        let labels = default_category_labels();
        assert_eq!(labels.len(), SUGGESTED_CATEGORIES.len());
        assert!(labels.iter().all(|label| is_suggested(label)));
    }
}
