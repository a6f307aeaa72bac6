use shared::{ClassificationRequest, ClassifyError, Reply, ResultView};

/// Sends one classification request and hands back the raw reply.
///
/// Failures to send or receive are reported as [`ClassifyError::Transport`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, request: &ClassificationRequest)
    -> Result<Reply, ClassifyError>;
}

/// The three page regions a submission touches.
pub trait SubmissionSurface {
    fn message(&self) -> String;
    fn set_trigger_enabled(&self, enabled: bool);
    fn clear_result(&self);
    fn show_result(&self, view: ResultView);
}

// Re-enables the trigger when dropped, whichever way the submission ends.
struct Submitting<'a, S: SubmissionSurface>(&'a S);

impl<'a, S: SubmissionSurface> Submitting<'a, S> {
    fn begin(surface: &'a S) -> Self {
        surface.set_trigger_enabled(false);
        Self(surface)
    }
}

impl<S: SubmissionSurface> Drop for Submitting<'_, S> {
    fn drop(&mut self) {
        self.0.set_trigger_enabled(true);
    }
}

pub struct SubmissionHandler<T> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> SubmissionHandler<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        Self { transport, endpoint: endpoint.into() }
    }

    /// Classifies the surface's current message and renders the outcome.
    ///
    /// Every failure is absorbed here: it is logged and mapped to a view.
    pub async fn handle_submit<S: SubmissionSurface>(&self, surface: &S) -> ResultView {
        let _submitting = Submitting::begin(surface);
        surface.clear_result();

        let request = ClassificationRequest::new(surface.message());
        let view = match self.classify(&request).await {
            Ok(spam) => {
                log::debug!("classification verdict: spam={}", spam);
                ResultView::for_verdict(spam)
            }
            Err(e) => {
                log::error!("{}", e);
                e.view()
            }
        };

        surface.show_result(view);
        view
    }

    async fn classify(&self, request: &ClassificationRequest) -> Result<bool, ClassifyError> {
        let reply = self.transport.post_json(&self.endpoint, request).await?;
        reply.verdict()
    }
}
