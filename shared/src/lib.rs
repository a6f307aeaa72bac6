use serde::{Deserialize, Serialize};

mod reply;
mod view;

pub use reply::{ClassifyError, Reply};
pub use view::{ResultView, Segment};

/// Hosted classification service used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://airnope.onrender.com/";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ClassificationRequest {
    pub message: String,
}

impl ClassificationRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationResponse {
    pub spam: bool,
}
