use std::collections::{BTreeMap, HashSet};

use crate::console::ConsoleError;
use crate::models::{JobResult, PreferenceSet};

/// What was sent with the last submission. The validation table reads the
/// "Your Preference" column from here, never from the live form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedSnapshot {
    pub preferences: PreferenceSet,
    pub weights: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ResultsView {
    /// Nothing submitted yet, or a submission is in flight.
    #[default]
    Blank,
    /// The stored job list, which may be empty.
    Jobs,
    Failed(String),
}

/// Session-scoped results state with a single owner.
///
/// Written only by the Submission Flow (snapshot on submit, jobs on
/// completion); the validation toggle only flips which cards are expanded.
#[derive(Debug, Default)]
pub struct SessionState {
    last_submitted: Option<SubmittedSnapshot>,
    jobs: Vec<JobResult>,
    view: ResultsView,
    expanded: HashSet<String>,
}

impl SessionState {
    pub fn last_submitted(&self) -> Option<&SubmittedSnapshot> {
        self.last_submitted.as_ref()
    }

    pub fn jobs(&self) -> &[JobResult] {
        &self.jobs
    }

    pub fn view(&self) -> &ResultsView {
        &self.view
    }

    pub fn is_expanded(&self, job_id: &str) -> bool {
        self.expanded.contains(job_id)
    }

    pub(crate) fn begin_submission(&mut self, snapshot: SubmittedSnapshot) {
        self.last_submitted = Some(snapshot);
        self.view = ResultsView::Blank;
    }

    /// Replaces the job list wholesale; every card starts collapsed.
    pub(crate) fn replace_jobs(&mut self, jobs: Vec<JobResult>) {
        self.jobs = jobs;
        self.expanded.clear();
        self.view = ResultsView::Jobs;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.jobs.clear();
        self.expanded.clear();
        self.view = ResultsView::Failed(message);
    }

    /// Flips a card's validation view. Returns whether it is now expanded.
    pub fn toggle_validation(&mut self, job_id: &str) -> Result<bool, ConsoleError> {
        let visible = self.view == ResultsView::Jobs && self.jobs.iter().any(|j| j.id() == job_id);
        if !visible {
            return Err(ConsoleError::UnknownJob(job_id.to_string()));
        }
        if self.expanded.remove(job_id) {
            Ok(false)
        } else {
            self.expanded.insert(job_id.to_string());
            Ok(true)
        }
    }
}
