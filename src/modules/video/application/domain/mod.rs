mod submission;

pub use submission::{NewVideoSubmission, VideoStatus, VideoSubmission};
