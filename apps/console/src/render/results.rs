//! Job cards and the results-area placeholders.

use crate::models::job::display_text;
use crate::models::JobResult;
use crate::render::escape::escape_html;
use crate::render::validation::{render_toggle_button, render_validation_table};
use crate::session::{ResultsView, SessionState, SubmittedSnapshot};

pub const NO_RESULTS_HTML: &str = r#"<div class="placeholder"><i data-feather="alert-circle"></i><p>No matching jobs found.</p><small>Try broadening your search criteria.</small></div>"#;

const NO_BREAKDOWN_HTML: &str = "<li><em>No breakdown available</em></li>";

/// Inner HTML of the results area.
pub fn render_results(session: &SessionState) -> String {
    match session.view() {
        ResultsView::Blank => String::new(),
        ResultsView::Failed(message) => render_error(message),
        ResultsView::Jobs if session.jobs().is_empty() => NO_RESULTS_HTML.to_string(),
        ResultsView::Jobs => {
            let snapshot = session.last_submitted().cloned().unwrap_or_default();
            session
                .jobs()
                .iter()
                .enumerate()
                .map(|(index, job)| {
                    render_card(index, job, session.is_expanded(&job.id()), &snapshot)
                })
                .collect()
        }
    }
}

pub fn render_error(message: &str) -> String {
    format!(
        r#"<div class="placeholder"><i data-feather="alert-triangle"></i><p>Unable to fetch recommendations</p><small>{}</small></div>"#,
        escape_html(message)
    )
}

/// One job card. Collapsed and expanded cards differ only in the toggle
/// button and the validation view, so collapsing restores the exact markup.
pub fn render_card(
    index: usize,
    job: &JobResult,
    expanded: bool,
    snapshot: &SubmittedSnapshot,
) -> String {
    let id = escape_html(&job.id());
    let score = job.score();
    let view = if expanded {
        format!(
            r#"<div class="validation-view">{}</div>"#,
            render_validation_table(job, snapshot)
        )
    } else {
        r#"<div class="validation-view" hidden></div>"#.to_string()
    };

    format!(
        r#"<article class="job-card" style="animation-delay: {delay}ms;" data-job-id="{id}">
  <div class="card-header">
    <div>
      <h3>{title}</h3>
      <h4 class="muted">{company} - {location}</h4>
    </div>
    <div class="match-score" style="--score:{score}"><span>{score}%</span></div>
  </div>
  <div class="match-story"><p>{story}</p></div>
  <div class="card-actions">
    <details class="score-breakdown"><summary>View Score Breakdown</summary><ul>{breakdown}</ul></details>
    {toggle}
  </div>
  {view}
</article>
"#,
        delay = index * 100,
        title = escape_html(&display_text(&job.job_title)),
        company = escape_html(&display_text(&job.company)),
        location = escape_html(&display_text(&job.location)),
        story = escape_html(&display_text(&job.story)),
        breakdown = render_breakdown(job),
        toggle = render_toggle_button(&id, expanded),
    )
}

fn render_breakdown(job: &JobResult) -> String {
    match job.breakdown_entries() {
        Some(entries) => entries
            .iter()
            .map(|(label, value)| {
                format!(
                    "<li><strong>{}:</strong> {}%</li>",
                    escape_html(label),
                    escape_html(value)
                )
            })
            .collect(),
        None => NO_BREAKDOWN_HTML.to_string(),
    }
}
