use serde_json::{Map, Value};
use thiserror::Error;

use crate::{ClassificationResponse, ResultView};

pub const TOO_MANY_REQUESTS: u16 = 429;

/// Every way a classification call can fail short of a verdict.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("rate limited by the classification endpoint")]
    RateLimited,
    #[error("HTTP Status {status}: {reason}")]
    Server { status: u16, reason: String },
    #[error("malformed classification response: {0}")]
    MalformedResponse(String),
}

impl ClassifyError {
    pub fn view(&self) -> ResultView {
        match self {
            Self::RateLimited => ResultView::RateLimited,
            Self::Transport(_) | Self::Server { .. } | Self::MalformedResponse(_) => {
                ResultView::Error
            }
        }
    }
}

/// Status line and body of an HTTP response, independent of the client that received it.
/// Transports leave `body` empty for non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl Reply {
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self { status, reason: reason.into(), body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn verdict(&self) -> Result<bool, ClassifyError> {
        if self.status == TOO_MANY_REQUESTS {
            return Err(ClassifyError::RateLimited);
        }
        if !self.is_success() {
            return Err(ClassifyError::Server {
                status: self.status,
                reason: self.reason.clone(),
            });
        }

        // Derived struct decoding also accepts `[true]`; only an object carries a verdict.
        let malformed = |e: serde_json::Error| ClassifyError::MalformedResponse(e.to_string());
        let object = serde_json::from_str::<Map<String, Value>>(&self.body).map_err(malformed)?;
        serde_json::from_value::<ClassificationResponse>(Value::Object(object))
            .map(|response| response.spam)
            .map_err(malformed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_decodes_verdict() {
        assert_eq!(Reply::new(200, "OK", r#"{"spam": true}"#).verdict(), Ok(true));
        assert_eq!(Reply::new(201, "Created", r#"{"spam": false}"#).verdict(), Ok(false));
    }

    #[test]
    fn too_many_requests_wins_over_body() {
        let reply = Reply::new(429, "Too Many Requests", r#"{"spam": true}"#);
        assert_eq!(reply.verdict(), Err(ClassifyError::RateLimited));
        assert_eq!(ClassifyError::RateLimited.view(), ResultView::RateLimited);
    }

    #[test]
    fn other_statuses_are_server_errors() {
        for (status, reason) in [(500, "Internal Server Error"), (503, "Service Unavailable"), (404, "Not Found")] {
            let err = Reply::new(status, reason, "").verdict().unwrap_err();
            assert_eq!(err.view(), ResultView::Error);
            assert_eq!(err.to_string(), format!("HTTP Status {status}: {reason}"));
        }
    }

    #[test]
    fn unparseable_success_is_malformed() {
        for body in ["", "not json", "{}", r#"{"spam": null}"#, "[true]", "[false]", "true"] {
            let err = Reply::new(200, "OK", body).verdict().unwrap_err();
            assert!(matches!(err, ClassifyError::MalformedResponse(_)), "{body:?} gave {err:?}");
            assert_eq!(err.view(), ResultView::Error);
        }
    }

    #[test]
    fn transport_failures_render_error_view() {
        let err = ClassifyError::Transport("connection refused".into());
        assert_eq!(err.view(), ResultView::Error);
    }
}
