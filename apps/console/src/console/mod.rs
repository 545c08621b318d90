//! Console: the typed action dispatcher that owns all interactive state.
//!
//! `dispatch` is synchronous and never touches the network: actions that need
//! the backend return a `Command`, the caller runs it with `execute` (without
//! holding any lock) and feeds the resulting `*Finished` action back in.

use thiserror::Error;
use tracing::debug;

use crate::backend::MatchBackend;
use crate::fields::FormFields;
use crate::flows::{SubmissionFlow, UploadFlow};
use crate::session::SessionState;
use crate::weights::WeightModel;

pub mod action;

pub use action::{Action, Command};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Unknown weight criterion '{0}'")]
    UnknownCriterion(String),

    #[error("Job '{0}' is not in the current results")]
    UnknownJob(String),

    #[error("A résumé upload is already in progress")]
    UploadInFlight,

    #[error("A recommendation request is already in progress")]
    SubmissionInFlight,
}

#[derive(Debug)]
pub struct Console {
    weights: WeightModel,
    fields: FormFields,
    upload: UploadFlow,
    submission: SubmissionFlow,
    session: SessionState,
}

impl Console {
    pub fn new(normalize_weights: bool) -> Self {
        Self {
            weights: WeightModel::with_defaults(normalize_weights),
            fields: FormFields::default(),
            upload: UploadFlow::default(),
            submission: SubmissionFlow::default(),
            session: SessionState::default(),
        }
    }

    pub fn weights(&self) -> &WeightModel {
        &self.weights
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn upload(&self) -> &UploadFlow {
        &self.upload
    }

    pub fn submission(&self) -> &SubmissionFlow {
        &self.submission
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn dispatch(&mut self, action: Action) -> Result<Option<Command>, ConsoleError> {
        debug!(action = action.name(), "dispatch");
        match action {
            Action::SetValue { key, raw } => {
                self.weights.set_value(&key, raw)?;
                Ok(None)
            }
            Action::SetEnabled { key, enabled } => {
                self.weights.set_enabled(&key, enabled)?;
                Ok(None)
            }
            Action::SetNormalize(on) => {
                self.weights.set_normalizing(on);
                Ok(None)
            }
            Action::BeginUpload(upload) => {
                let upload = self.upload.begin(upload)?;
                Ok(Some(Command::ParseResume(upload)))
            }
            Action::UploadFinished { file_name, outcome } => {
                self.upload.finish(file_name, outcome, &mut self.fields);
                Ok(None)
            }
            Action::Submit(fields) => {
                let request = self
                    .submission
                    .begin(&fields, &self.weights, &mut self.session)?;
                self.fields = fields;
                Ok(Some(Command::Recommend(request)))
            }
            Action::RecommendFinished(outcome) => {
                self.submission.finish(outcome, &mut self.session);
                Ok(None)
            }
            Action::ToggleValidation(job_id) => {
                self.session.toggle_validation(&job_id)?;
                Ok(None)
            }
        }
    }
}

/// Runs a command against the backend and returns the action completing it.
pub async fn execute(backend: &dyn MatchBackend, command: Command) -> Action {
    match command {
        Command::ParseResume(upload) => {
            let file_name = upload.file_name.clone();
            let outcome = backend.parse_resume(upload).await;
            Action::UploadFinished { file_name, outcome }
        }
        Command::Recommend(request) => Action::RecommendFinished(backend.recommend(&request).await),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use crate::flows::{SubmissionState, UploadState};
    use crate::models::{JobResult, ParsedResume, RecommendRequest, ResumeUpload};
    use async_trait::async_trait;
    use bytes::Bytes;
    use serde_json::json;

    struct CannedBackend;

    #[async_trait]
    impl MatchBackend for CannedBackend {
        async fn parse_resume(&self, _upload: ResumeUpload) -> Result<ParsedResume, BackendError> {
            Ok(ParsedResume {
                skills: json!(["Rust", "Kafka"]),
                titles: json!(["Platform Engineer"]),
                ..Default::default()
            })
        }

        async fn recommend(
            &self,
            request: &RecommendRequest,
        ) -> Result<Vec<JobResult>, BackendError> {
            let job = serde_json::from_value(json!({
                "job_id": "j1",
                "match_score": request.weights.get("skills").copied().unwrap_or_default(),
            }))
            .unwrap();
            Ok(vec![job])
        }
    }

    #[tokio::test]
    async fn test_submit_round_trip() {
        let mut console = Console::new(true);
        console
            .dispatch(Action::SetEnabled {
                key: "salary".to_string(),
                enabled: false,
            })
            .unwrap();
        let command = console
            .dispatch(Action::Submit(FormFields {
                skills: "Rust".to_string(),
                ..Default::default()
            }))
            .unwrap()
            .expect("submit produces a command");
        assert!(console.submission().is_in_flight());

        let finished = execute(&CannedBackend, command).await;
        console.dispatch(finished).unwrap();

        assert_eq!(console.submission().state(), &SubmissionState::Rendered { count: 1 });
        assert_eq!(console.session().jobs().len(), 1);
        let snapshot = console.session().last_submitted().unwrap();
        assert!(!snapshot.weights.contains_key("salary"));
        assert_eq!(snapshot.weights.values().sum::<i64>(), 100);
        assert_eq!(console.fields().skills, "Rust");
    }

    #[tokio::test]
    async fn test_upload_round_trip_fills_fields() {
        let mut console = Console::new(true);
        let command = console
            .dispatch(Action::BeginUpload(ResumeUpload {
                file_name: "cv.pdf".to_string(),
                content_type: Some("application/pdf".to_string()),
                bytes: Bytes::from_static(b"%PDF-1.7"),
            }))
            .unwrap()
            .unwrap();
        let finished = execute(&CannedBackend, command).await;
        console.dispatch(finished).unwrap();

        assert_eq!(
            console.upload().state(),
            &UploadState::Parsed {
                file_name: "cv.pdf".to_string()
            }
        );
        assert_eq!(console.fields().skills, "Rust, Kafka");
        assert_eq!(console.fields().titles, "Platform Engineer");
    }

    #[test]
    fn test_flows_do_not_block_each_other() {
        let mut console = Console::new(true);
        console
            .dispatch(Action::BeginUpload(ResumeUpload {
                file_name: "cv.pdf".to_string(),
                content_type: None,
                bytes: Bytes::new(),
            }))
            .unwrap();
        let submit = console.dispatch(Action::Submit(FormFields::default()));
        assert!(matches!(submit, Ok(Some(Command::Recommend(_)))));
        // weight edits stay available while both are in flight
        console
            .dispatch(Action::SetValue {
                key: "skills".to_string(),
                raw: 80.0,
            })
            .unwrap();
        assert_eq!(console.weights().enabled_total(), 100);
    }

    #[test]
    fn test_weight_actions_reject_unknown_keys() {
        let mut console = Console::new(false);
        let err = console
            .dispatch(Action::SetEnabled {
                key: "perks".to_string(),
                enabled: true,
            })
            .unwrap_err();
        assert!(matches!(err, ConsoleError::UnknownCriterion(_)));
    }
}
