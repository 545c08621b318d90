use serde::Deserialize;
use serde_json::{Map, Value};

/// Attributes shown in the validation table, in display order.
pub const VALIDATION_ATTRIBUTES: [&str; 5] = ["Skills", "Title", "Location", "Industry", "Salary"];

/// One ranked job as returned by the scoring backend.
///
/// The backend owns this shape, so every field is kept as raw JSON and read
/// through lenient accessors: a missing or oddly typed field degrades to an
/// empty string, a zero score or a placeholder instead of failing the whole
/// response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobResult {
    #[serde(default)]
    pub job_id: Value,
    #[serde(default)]
    pub job_title: Value,
    #[serde(default)]
    pub company: Value,
    #[serde(default)]
    pub location: Value,
    #[serde(default)]
    pub story: Value,
    #[serde(default)]
    pub match_score: Value,
    #[serde(default)]
    pub breakdown: Value,
    #[serde(default)]
    pub validation_details: Value,
}

impl JobResult {
    pub fn id(&self) -> String {
        display_text(&self.job_id)
    }

    /// Numeric score; missing, non-numeric and non-finite values become 0.
    pub fn score(&self) -> f64 {
        let score = match &self.match_score {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            Value::Bool(true) => 1.0,
            _ => 0.0,
        };
        if score.is_finite() {
            score
        } else {
            0.0
        }
    }

    /// Breakdown entries in the order the server sent them, or `None` when
    /// the breakdown is absent or not an object.
    pub fn breakdown_entries(&self) -> Option<Vec<(&str, String)>> {
        self.breakdown.as_object().map(|map| {
            map.iter()
                .map(|(label, value)| (label.as_str(), display_text(value)))
                .collect()
        })
    }

    pub fn validation_entry(&self, attribute: &str) -> ValidationEntry {
        let details: Option<&Map<String, Value>> = self.validation_details.as_object();
        details
            .and_then(|d| d.get(attribute))
            .map(ValidationEntry::from_value)
            .unwrap_or(ValidationEntry::Text(String::new()))
    }
}

/// How a job requirement matched the user's preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchKind {
    /// Exact preference match.
    Direct,
    /// Inferred or related match.
    Semantic,
    /// Anything else the backend sends (it uses `none` for no match).
    Unmatched,
}

impl MatchKind {
    fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some("direct") => MatchKind::Direct,
            Some("semantic") => MatchKind::Semantic,
            _ => MatchKind::Unmatched,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchItem {
    pub kind: MatchKind,
    pub text: String,
}

/// The "Job Requirement" cell for one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationEntry {
    Matches(Vec<MatchItem>),
    Text(String),
}

impl ValidationEntry {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => ValidationEntry::Matches(
                items
                    .iter()
                    .map(|item| MatchItem {
                        kind: MatchKind::from_tag(item.get("type").and_then(Value::as_str)),
                        text: item.get("skill").map(display_text).unwrap_or_default(),
                    })
                    .collect(),
            ),
            other => ValidationEntry::Text(display_text(other)),
        }
    }
}

/// Renders a JSON scalar the way it should read on screen: strings verbatim,
/// numbers and booleans in JSON form, null as empty.
pub fn display_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
