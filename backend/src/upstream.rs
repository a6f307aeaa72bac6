use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use reqwest::header::ACCEPT;
use shared::{ClassificationRequest, ClassifyError, Reply};
use url::Url;

/// Source of spam verdicts for the gateway.
pub trait Classifier: Send + Sync {
    fn classify<'a>(&'a self, message: &'a str) -> LocalBoxFuture<'a, Result<bool, ClassifyError>>;
}

/// Forwards messages to the hosted classification endpoint.
#[derive(Clone)]
pub struct UpstreamClassifier {
    http: reqwest::Client,
    url: Url,
}

impl UpstreamClassifier {
    pub fn new(url: Url, timeout: Duration) -> reqwest::Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, url })
    }

    async fn post(&self, message: &str) -> Result<Reply, ClassifyError> {
        let response = self
            .http
            .post(self.url.clone())
            .header(ACCEPT, "application/json")
            .json(&ClassificationRequest::new(message))
            .send()
            .await
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default().to_string();
        let body = if status.is_success() {
            response
                .text()
                .await
                .map_err(|e| ClassifyError::Transport(e.to_string()))?
        } else {
            String::new()
        };

        Ok(Reply::new(status.as_u16(), reason, body))
    }
}

impl Classifier for UpstreamClassifier {
    fn classify<'a>(&'a self, message: &'a str) -> LocalBoxFuture<'a, Result<bool, ClassifyError>> {
        async move {
            let reply = self.post(message).await?;
            reply.verdict()
        }
        .boxed_local()
    }
}
