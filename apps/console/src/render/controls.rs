//! Sidebar controls: preference form, résumé upload and weight sliders.
//! Trigger labels and disabled flags are derived from each flow's state.

use crate::fields::FormFields;
use crate::flows::{SubmissionFlow, SubmissionState, UploadFlow, UploadState};
use crate::render::escape::escape_html;
use crate::weights::{WeightCriterion, WeightModel};

const TEXT_FIELDS: &[(&str, &str, &str)] = &[
    ("skills", "Skills", "e.g. Python, SQL, AWS"),
    ("titles", "Job Titles", "e.g. Data Analyst, Backend Engineer"),
    ("locations", "Locations", "e.g. Bengaluru, Remote"),
    ("industries", "Industries", "e.g. Fintech, Healthcare"),
];

pub fn render_preferences_form(fields: &FormFields, submission: &SubmissionFlow) -> String {
    let mut html = String::from(r#"<form id="preferences-form" method="post" action="/recommend">"#);
    for (name, label, placeholder) in TEXT_FIELDS {
        let value = match *name {
            "skills" => &fields.skills,
            "titles" => &fields.titles,
            "locations" => &fields.locations,
            _ => &fields.industries,
        };
        html.push_str(&format!(
            r#"<label for="{name}">{label}</label><input type="text" id="{name}" name="{name}" placeholder="{placeholder}" value="{}">"#,
            escape_html(value)
        ));
    }
    html.push_str(&format!(
        r#"<label for="min_salary">Minimum Salary (₹)</label><input type="text" id="min_salary" name="min_salary" inputmode="numeric" value="{}">"#,
        escape_html(&fields.min_salary)
    ));
    html.push_str(&render_submit_button(submission));
    html.push_str("</form>");
    html
}

pub fn render_submit_button(submission: &SubmissionFlow) -> String {
    match submission.state() {
        SubmissionState::Submitting => {
            r#"<button type="submit" id="submit-btn" disabled><i data-feather="loader" class="spin"></i> Analyzing...</button>"#.to_string()
        }
        _ => r#"<button type="submit" id="submit-btn"><i data-feather="search"></i> Find Jobs</button>"#.to_string(),
    }
}

pub fn render_upload_panel(upload: &UploadFlow) -> String {
    let disabled = if upload.is_in_flight() { " disabled" } else { "" };
    format!(
        r#"<section id="resume-panel"><form method="post" action="/resume" enctype="multipart/form-data"><input type="file" id="resume-upload-input" name="resume" accept=".pdf,.doc,.docx,.txt"><button type="submit" id="resume-upload-btn"{disabled}><i data-feather="upload"></i> Upload Résumé</button></form><p id="resume-status">{}</p></section>"#,
        render_upload_status(upload.state())
    )
}

pub fn render_upload_status(state: &UploadState) -> String {
    match state {
        UploadState::Idle => String::new(),
        UploadState::Uploading { .. } => {
            r#"<i data-feather="loader" class="spin"></i> Parsing..."#.to_string()
        }
        UploadState::Parsed { file_name } => {
            format!("Successfully parsed: {}", escape_html(file_name))
        }
        UploadState::Failed { message } => format!("Error: {}", escape_html(message)),
    }
}

pub fn render_weights_panel(weights: &WeightModel) -> String {
    let checked = if weights.is_normalizing() { " checked" } else { "" };
    let mut html = format!(
        r#"<section id="weights-panel"><form method="post" action="/weights/normalize"><label><input type="checkbox" id="normalize-toggle" name="enabled" value="true"{checked}> Normalize to 100%</label><button type="submit">Apply</button></form>"#
    );
    for criterion in weights.criteria() {
        html.push_str(&render_weight_row(criterion));
    }
    html.push_str(&format!(
        r#"<p class="weight-total">Total: {}%</p></section>"#,
        weights.enabled_total()
    ));
    html
}

fn render_weight_row(criterion: &WeightCriterion) -> String {
    let key = escape_html(&criterion.key);
    let label = escape_html(&criterion.label);
    let rounded = criterion.rounded();
    let (row_class, disabled, toggle_label) = if criterion.enabled {
        ("weight-row", "", "Disable")
    } else {
        ("weight-row disabled", " disabled", "Enable")
    };
    format!(
        r#"<div class="{row_class}"><form method="post" action="/weights/{key}/enabled"><input type="hidden" name="enabled" value="{next}"><button type="submit" class="weight-enable-chk">{toggle_label}</button></form><form method="post" action="/weights/{key}/value"><label for="weight-{key}">{label}</label><input type="range" id="weight-{key}" name="value" min="0" max="100" value="{rounded}" data-weight-key="{key}"{disabled}><span class="weight-value">{rounded}%</span><button type="submit"{disabled}>Set</button></form></div>"#,
        next = !criterion.enabled,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{Action, Console};

    #[test]
    fn test_submit_button_reflects_flow_state() {
        let mut console = Console::new(true);
        let idle = render_submit_button(console.submission());
        assert!(idle.contains("Find Jobs"));
        assert!(!idle.contains("disabled"));

        console.dispatch(Action::Submit(FormFields::default())).unwrap();
        let busy = render_submit_button(console.submission());
        assert!(busy.contains("Analyzing..."));
        assert!(busy.contains(" disabled"));
    }

    #[test]
    fn test_upload_status_escapes_file_name() {
        let status = render_upload_status(&UploadState::Parsed {
            file_name: "<cv>.pdf".to_string(),
        });
        assert_eq!(status, "Successfully parsed: &lt;cv&gt;.pdf");
        let failed = render_upload_status(&UploadState::Failed {
            message: "HTTP 502".to_string(),
        });
        assert_eq!(failed, "Error: HTTP 502");
    }

    #[test]
    fn test_weights_panel_shows_rounded_values_and_disabled_rows() {
        let mut weights = WeightModel::with_defaults(true);
        weights.set_enabled("salary", false).unwrap();
        let html = render_weights_panel(&weights);
        assert!(html.contains(r#"<div class="weight-row disabled">"#));
        assert!(html.contains(r#"action="/weights/salary/enabled"><input type="hidden" name="enabled" value="true">"#));
        assert!(html.contains("Total: 100%"));
        assert!(html.contains(r#"id="normalize-toggle" name="enabled" value="true" checked"#));
    }

    #[test]
    fn test_preferences_form_escapes_typed_values() {
        let fields = FormFields {
            skills: r#"C++, "Rust" & Go"#.to_string(),
            ..Default::default()
        };
        let html = render_preferences_form(&fields, &SubmissionFlow::default());
        assert!(html.contains(r#"value="C++, &quot;Rust&quot; &amp; Go""#));
    }
}
