use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Preferences sent to the scoring backend. Rebuilt from the form at every
/// submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    pub skills: Vec<String>,
    pub titles: Vec<String>,
    pub locations: Vec<String>,
    pub min_salary: u64,
    pub industries: Vec<String>,
}

/// Body of `POST /recommend`.
#[derive(Debug, Clone, Serialize)]
pub struct RecommendRequest {
    pub preferences: PreferenceSet,
    /// Enabled criteria only, `key → rounded percentage`.
    pub weights: BTreeMap<String, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_shape() {
        let request = RecommendRequest {
            preferences: PreferenceSet {
                skills: vec!["Rust".to_string()],
                min_salary: 1_200_000,
                ..Default::default()
            },
            weights: BTreeMap::from([("skills".to_string(), 60), ("title".to_string(), 40)]),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["preferences"]["skills"], json!(["Rust"]));
        assert_eq!(value["preferences"]["titles"], json!([]));
        assert_eq!(value["preferences"]["min_salary"], json!(1_200_000));
        assert_eq!(value["weights"], json!({ "skills": 60, "title": 40 }));
    }
}
