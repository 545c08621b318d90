//! Upload Flow: résumé parsing feeding the Field Serializer.
//!
//! `Idle → Uploading → (Parsed | Failed)`. `Parsed` and `Failed` accept a new
//! upload exactly like `Idle`; they only keep the status line to display.

use tracing::{info, warn};

use crate::backend::BackendError;
use crate::console::ConsoleError;
use crate::fields::FormFields;
use crate::models::{ParsedResume, ResumeUpload};

pub const NO_USABLE_FIELDS: &str = "Could not extract key skills or titles from the resume.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading { file_name: String },
    Parsed { file_name: String },
    Failed { message: String },
}

#[derive(Debug, Default)]
pub struct UploadFlow {
    state: UploadState,
}

impl UploadFlow {
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self.state, UploadState::Uploading { .. })
    }

    /// Marks the upload in flight and hands the file back for sending.
    pub fn begin(&mut self, upload: ResumeUpload) -> Result<ResumeUpload, ConsoleError> {
        if self.is_in_flight() {
            return Err(ConsoleError::UploadInFlight);
        }
        info!(file_name = %upload.file_name, "Résumé upload started");
        self.state = UploadState::Uploading {
            file_name: upload.file_name.clone(),
        };
        Ok(upload)
    }

    /// Applies the parse outcome. Fields are only touched when the backend
    /// answered with a usable body; a body with no skills and no titles still
    /// rewrites the fields (clearing them) and then fails.
    pub fn finish(
        &mut self,
        file_name: String,
        outcome: Result<ParsedResume, BackendError>,
        fields: &mut FormFields,
    ) {
        let result = outcome.and_then(|parsed| {
            if fields.apply_import(&parsed) {
                Ok(())
            } else {
                Err(BackendError::Semantic(NO_USABLE_FIELDS.to_string()))
            }
        });

        self.state = match result {
            Ok(()) => {
                info!(file_name = %file_name, "Résumé parsed");
                UploadState::Parsed { file_name }
            }
            Err(e) => {
                warn!(file_name = %file_name, status = ?e.status(), error = %e, "Résumé upload failed");
                UploadState::Failed {
                    message: e.to_string(),
                }
            }
        };
    }
}
