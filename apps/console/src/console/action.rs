use crate::backend::BackendError;
use crate::fields::FormFields;
use crate::models::{JobResult, ParsedResume, RecommendRequest, ResumeUpload};

/// Everything the user (or a completed request) can do to the console.
#[derive(Debug)]
pub enum Action {
    SetValue { key: String, raw: f64 },
    SetEnabled { key: String, enabled: bool },
    SetNormalize(bool),
    BeginUpload(ResumeUpload),
    UploadFinished {
        file_name: String,
        outcome: Result<ParsedResume, BackendError>,
    },
    Submit(FormFields),
    RecommendFinished(Result<Vec<JobResult>, BackendError>),
    ToggleValidation(String),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetValue { .. } => "set_value",
            Action::SetEnabled { .. } => "set_enabled",
            Action::SetNormalize(_) => "set_normalize",
            Action::BeginUpload(_) => "begin_upload",
            Action::UploadFinished { .. } => "upload_finished",
            Action::Submit(_) => "submit",
            Action::RecommendFinished(_) => "recommend_finished",
            Action::ToggleValidation(_) => "toggle_validation",
        }
    }
}

/// Backend work requested by an action.
#[derive(Debug)]
pub enum Command {
    ParseResume(ResumeUpload),
    Recommend(RecommendRequest),
}
