//! Field Serializer: free-text preference inputs to and from string lists.
//!
//! Typed fields are comma-separated and unbounded. Lists imported from a
//! parsed résumé are bounded: items over 100 characters are dropped and at
//! most 50 items are kept.

use serde::Deserialize;
use serde_json::Value;

use crate::models::{ParsedResume, PreferenceSet};

pub const MAX_IMPORTED_ITEMS: usize = 50;
pub const MAX_ITEM_CHARS: usize = 100;

/// Raw text of the preference form, exactly as the user typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FormFields {
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub titles: String,
    #[serde(default)]
    pub locations: String,
    #[serde(default)]
    pub industries: String,
    #[serde(default)]
    pub min_salary: String,
}

impl FormFields {
    pub fn to_preferences(&self) -> PreferenceSet {
        PreferenceSet {
            skills: split_list(&self.skills),
            titles: split_list(&self.titles),
            locations: split_list(&self.locations),
            min_salary: parse_min_salary(&self.min_salary),
            industries: split_list(&self.industries),
        }
    }

    /// Overwrites the list fields with résumé suggestions. A field whose
    /// filtered list is empty is cleared. Returns whether skills or titles
    /// yielded anything; locations and industries are best-effort.
    pub fn apply_import(&mut self, parsed: &ParsedResume) -> bool {
        let any_skills = fill_from_import(&mut self.skills, &parsed.skills);
        let any_titles = fill_from_import(&mut self.titles, &parsed.titles);
        fill_from_import(&mut self.locations, &parsed.locations);
        fill_from_import(&mut self.industries, &parsed.industries);
        any_skills || any_titles
    }
}

/// Splits a comma-separated input into trimmed, non-empty items.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Leading decimal digits after optional whitespace; anything else is 0.
/// Digit runs too long for `u64` saturate.
pub fn parse_min_salary(raw: &str) -> u64 {
    let digits: String = raw
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u64::MAX)
}

/// Filters a server-suggested list: non-strings dropped, trimmed, empty and
/// over-long items dropped, capped at `max_items`.
pub fn filter_imported(value: &Value, max_items: usize) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| item.as_str().map(str::trim).unwrap_or(""))
        .filter(|s| !s.is_empty() && s.chars().count() <= MAX_ITEM_CHARS)
        .take(max_items)
        .map(String::from)
        .collect()
}

fn fill_from_import(field: &mut String, value: &Value) -> bool {
    let items = filter_imported(value, MAX_IMPORTED_ITEMS);
    *field = items.join(", ");
    !items.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_list_trims_and_drops_empty() {
        assert_eq!(
            split_list(" Rust ,  Go,, ,Python "),
            vec!["Rust", "Go", "Python"]
        );
        assert!(split_list("   ").is_empty());
    }

    #[test]
    fn test_parse_min_salary() {
        assert_eq!(parse_min_salary("1200000"), 1_200_000);
        assert_eq!(parse_min_salary("  900000 INR"), 900_000);
        assert_eq!(parse_min_salary("abc"), 0);
        assert_eq!(parse_min_salary(""), 0);
        assert_eq!(parse_min_salary("-5000"), 0);
        assert_eq!(parse_min_salary("99999999999999999999999 per year"), u64::MAX);
    }

    #[test]
    fn test_filter_imported_bounds() {
        let long = "x".repeat(101);
        let exact = "y".repeat(100);
        let value = json!(["  Rust  ", "", 7, null, long, exact.clone(), "Go"]);
        assert_eq!(
            filter_imported(&value, MAX_IMPORTED_ITEMS),
            vec!["Rust".to_string(), exact, "Go".to_string()]
        );
    }

    #[test]
    fn test_filter_imported_caps_item_count() {
        let many: Vec<String> = (0..80).map(|i| format!("skill{i}")).collect();
        let filtered = filter_imported(&json!(many), MAX_IMPORTED_ITEMS);
        assert_eq!(filtered.len(), 50);
        assert_eq!(filtered[49], "skill49");
    }

    #[test]
    fn test_filter_imported_non_array_is_empty() {
        assert!(filter_imported(&json!("Rust, Go"), MAX_IMPORTED_ITEMS).is_empty());
        assert!(filter_imported(&Value::Null, MAX_IMPORTED_ITEMS).is_empty());
    }

    #[test]
    fn test_apply_import_fills_and_clears() {
        let mut fields = FormFields {
            skills: "old".to_string(),
            locations: "Pune".to_string(),
            industries: "Fintech".to_string(),
            ..Default::default()
        };
        let parsed = ParsedResume {
            skills: json!(["Rust", "SQL"]),
            titles: json!([]),
            locations: json!(["Bengaluru"]),
            industries: Value::Null,
        };
        assert!(fields.apply_import(&parsed));
        assert_eq!(fields.skills, "Rust, SQL");
        assert_eq!(fields.titles, "");
        assert_eq!(fields.locations, "Bengaluru");
        assert_eq!(fields.industries, "");
    }

    #[test]
    fn test_apply_import_reports_nothing_usable() {
        let mut fields = FormFields::default();
        let parsed = ParsedResume {
            skills: json!([]),
            titles: json!(["   "]),
            locations: json!(["Remote"]),
            ..Default::default()
        };
        assert!(!fields.apply_import(&parsed));
        assert_eq!(fields.locations, "Remote");
    }

    #[test]
    fn test_to_preferences() {
        let fields = FormFields {
            skills: "Rust, Go".to_string(),
            titles: "Backend Engineer".to_string(),
            locations: String::new(),
            industries: "Fintech ,".to_string(),
            min_salary: "1500000".to_string(),
        };
        let prefs = fields.to_preferences();
        assert_eq!(prefs.skills, vec!["Rust", "Go"]);
        assert_eq!(prefs.titles, vec!["Backend Engineer"]);
        assert!(prefs.locations.is_empty());
        assert_eq!(prefs.industries, vec!["Fintech"]);
        assert_eq!(prefs.min_salary, 1_500_000);
    }
}
