mod submission;

pub use submission::{validate_for_submission, SubmissionItem};
