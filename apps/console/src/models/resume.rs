use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;

/// A résumé file received from the browser, forwarded as-is to the parser.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Suggestions returned by `POST /parse_resume`.
///
/// The lists are kept as raw JSON: items that are not strings are dropped
/// later by the field serializer rather than failing the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParsedResume {
    #[serde(default)]
    pub skills: Value,
    #[serde(default)]
    pub titles: Value,
    #[serde(default)]
    pub locations: Value,
    #[serde(default)]
    pub industries: Value,
}
