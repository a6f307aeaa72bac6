use gloo_net::http::Request;
use shared::{ClassificationRequest, ClassifyError, Reply};

use crate::handler::Transport;

/// `fetch`-backed transport. No timeout or retry is applied on top of the browser's own.
#[derive(Clone, Copy, Default)]
pub struct GlooTransport;

fn transport_error(err: gloo_net::Error) -> ClassifyError {
    ClassifyError::Transport(err.to_string())
}

impl Transport for GlooTransport {
    async fn post_json(
        &self,
        url: &str,
        request: &ClassificationRequest,
    ) -> Result<Reply, ClassifyError> {
        // `json` also sets `Content-Type: application/json`.
        let response = Request::post(url)
            .header("Accept", "application/json")
            .json(request)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        let reason = response.status_text();
        let body = if response.ok() {
            response.text().await.map_err(transport_error)?
        } else {
            String::new()
        };

        Ok(Reply { status, reason, body })
    }
}
