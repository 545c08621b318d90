//! Per-job validation view: the user's submitted preferences next to the
//! match evidence the backend reported for each attribute.

use crate::models::{JobResult, MatchItem, MatchKind, ValidationEntry, VALIDATION_ATTRIBUTES};
use crate::render::currency::format_inr;
use crate::render::escape::escape_html;
use crate::session::SubmittedSnapshot;

const NOT_SPECIFIED_HTML: &str = "<i>Not specified</i>";

/// Toggle control for one card. `escaped_id` must already be escaped.
pub fn render_toggle_button(escaped_id: &str, expanded: bool) -> String {
    let (icon, label) = if expanded {
        ("x-square", "Hide Validation")
    } else {
        ("check-square", "Validate")
    };
    format!(
        r#"<form method="post" action="/validation" class="validate-form"><input type="hidden" name="job_id" value="{escaped_id}"><button type="submit" class="validate-btn"><i data-feather="{icon}"></i> {label}</button></form>"#
    )
}

pub fn render_validation_table(job: &JobResult, snapshot: &SubmittedSnapshot) -> String {
    let mut html = String::from(
        r#"<h5>Preference vs. Job Data</h5><table class="validation-table"><tr><th>Attribute</th><th>Your Preference</th><th>Job Requirement</th></tr>"#,
    );
    for attribute in VALIDATION_ATTRIBUTES {
        let preference = preference_text(attribute, snapshot);
        let preference_html = if preference.is_empty() {
            NOT_SPECIFIED_HTML.to_string()
        } else {
            escape_html(&preference)
        };
        html.push_str(&format!(
            "<tr><td><strong>{attribute}</strong></td><td>{preference_html}</td><td>{}</td></tr>",
            render_requirement(&job.validation_entry(attribute))
        ));
    }
    html.push_str("</table>");
    html
}

/// "Your Preference" text for an attribute; empty means not specified.
fn preference_text(attribute: &str, snapshot: &SubmittedSnapshot) -> String {
    let prefs = &snapshot.preferences;
    match attribute {
        "Skills" => prefs.skills.join(", "),
        "Title" => prefs.titles.join(", "),
        "Location" => prefs.locations.join(", "),
        "Industry" => prefs.industries.join(", "),
        "Salary" if prefs.min_salary > 0 => format!("Min: {}", format_inr(prefs.min_salary)),
        _ => String::new(),
    }
}

fn render_requirement(entry: &ValidationEntry) -> String {
    match entry {
        ValidationEntry::Matches(items) => items
            .iter()
            .map(render_match_item)
            .collect::<Vec<_>>()
            .join(", "),
        ValidationEntry::Text(text) if text.is_empty() => NOT_SPECIFIED_HTML.to_string(),
        ValidationEntry::Text(text) => escape_html(text),
    }
}

fn render_match_item(item: &MatchItem) -> String {
    let text = escape_html(&item.text);
    match item.kind {
        MatchKind::Direct => format!(r#"<span class="match-highlight direct">{text}</span>"#),
        MatchKind::Semantic => format!(r#"<span class="match-highlight semantic">{text}</span>"#),
        MatchKind::Unmatched => text,
    }
}
