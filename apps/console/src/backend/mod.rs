//! Backend client: the only place that talks to the scoring service.
//!
//! `MatchBackend` is the seam: the console holds an `Arc<dyn MatchBackend>`,
//! `HttpBackend` is the production implementation and tests swap in stubs.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{JobResult, ParsedResume, RecommendRequest, ResumeUpload};

pub mod decode;
pub mod http;

pub use http::HttpBackend;

/// Every way a backend call can fail. `Display` is the message shown to the
/// user, already resolved to the most specific source available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body is not the expected structure.
    #[error("{0}")]
    Malformed(String),

    /// 2xx response carrying an `error` field.
    #[error("{0}")]
    Application(String),

    /// Well-formed response that is unusable.
    #[error("{0}")]
    Semantic(String),
}

impl BackendError {
    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[async_trait]
pub trait MatchBackend: Send + Sync {
    /// `POST /parse_resume` with the file in the multipart field `resume`.
    async fn parse_resume(&self, upload: ResumeUpload) -> Result<ParsedResume, BackendError>;

    /// `POST /recommend` with the preferences and enabled weights.
    async fn recommend(&self, request: &RecommendRequest) -> Result<Vec<JobResult>, BackendError>;
}
