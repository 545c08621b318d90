pub mod job;
pub mod preferences;
pub mod resume;

pub use job::{JobResult, MatchItem, MatchKind, ValidationEntry, VALIDATION_ATTRIBUTES};
pub use preferences::{PreferenceSet, RecommendRequest};
pub use resume::{ParsedResume, ResumeUpload};
