// Request flows: one résumé upload and one recommendation submission, each
// gated independently so neither blocks the other.

pub mod submission;
pub mod upload;

pub use submission::{SubmissionFlow, SubmissionState};
pub use upload::{UploadFlow, UploadState};
