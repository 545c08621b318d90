//! Submission Flow: builds the recommendation request and hands the outcome
//! to the session.
//!
//! `Idle → Submitting → (Rendered | Failed)`; terminal states accept a new
//! submission.

use tracing::{info, warn};

use crate::backend::BackendError;
use crate::console::ConsoleError;
use crate::fields::FormFields;
use crate::models::{JobResult, RecommendRequest};
use crate::session::{SessionState, SubmittedSnapshot};
use crate::weights::WeightModel;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Rendered { count: usize },
    Failed { message: String },
}

#[derive(Debug, Default)]
pub struct SubmissionFlow {
    state: SubmissionState,
}

impl SubmissionFlow {
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Freezes the submitted preferences and weights in the session, clears
    /// the results area and returns the request to send.
    pub fn begin(
        &mut self,
        fields: &FormFields,
        weights: &WeightModel,
        session: &mut SessionState,
    ) -> Result<RecommendRequest, ConsoleError> {
        if self.is_in_flight() {
            return Err(ConsoleError::SubmissionInFlight);
        }

        let snapshot = SubmittedSnapshot {
            preferences: fields.to_preferences(),
            weights: weights.collect_payload(),
        };
        info!(
            skills = snapshot.preferences.skills.len(),
            titles = snapshot.preferences.titles.len(),
            weights = ?snapshot.weights,
            "Submitting preferences"
        );
        let request = RecommendRequest {
            preferences: snapshot.preferences.clone(),
            weights: snapshot.weights.clone(),
        };
        session.begin_submission(snapshot);
        self.state = SubmissionState::Submitting;
        Ok(request)
    }

    pub fn finish(
        &mut self,
        outcome: Result<Vec<JobResult>, BackendError>,
        session: &mut SessionState,
    ) {
        self.state = match outcome {
            Ok(jobs) => {
                let count = jobs.len();
                info!(count, "Recommendations rendered");
                session.replace_jobs(jobs);
                SubmissionState::Rendered { count }
            }
            Err(e) => {
                warn!(status = ?e.status(), error = %e, "Recommendation request failed");
                let message = e.to_string();
                session.fail(message.clone());
                SubmissionState::Failed { message }
            }
        };
    }
}
