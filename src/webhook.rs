//! HTTP delivery of leads to the webhook.

use crate::error::SubmissionError;
use crate::form::LeadSink;
use crate::lead::WebhookPayload;
use futures::future::{select, Either, LocalBoxFuture};
use futures::FutureExt;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;

/// Posts each lead as JSON to a fixed URL, bounded by a timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSink {
    url: String,
    timeout_ms: u32,
}

impl WebhookSink {
    pub fn new(url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            url: url.into(),
            timeout_ms,
        }
    }
}

impl Default for WebhookSink {
    fn default() -> Self {
        Self::new(crate::config::WEBHOOK_URL, crate::config::REQUEST_TIMEOUT_MS)
    }
}

/// Any 2xx counts as delivered; the body is ignored.
fn check_status(status: u16) -> Result<(), SubmissionError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(SubmissionError::Status(status))
    }
}

/// Resolve with `send` unless `timer` fires first.
///
/// The losing request is dropped, not aborted.
async fn race_timeout<S, T>(send: S, timer: T, timeout_ms: u32) -> Result<(), SubmissionError>
where
    S: Future<Output = Result<(), SubmissionError>> + Unpin,
    T: Future<Output = ()> + Unpin,
{
    match select(send, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(SubmissionError::Timeout(timeout_ms)),
    }
}

async fn post_json(url: String, payload: WebhookPayload) -> Result<(), SubmissionError> {
    let request = Request::post(&url)
        .json(&payload)
        .map_err(|e| SubmissionError::Encode(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| SubmissionError::Network(e.to_string()))?;

    check_status(response.status())
}

impl LeadSink for WebhookSink {
    fn deliver(
        &self,
        payload: WebhookPayload,
    ) -> LocalBoxFuture<'static, Result<(), SubmissionError>> {
        let timeout_ms = self.timeout_ms;
        let send = post_json(self.url.clone(), payload).boxed_local();
        race_timeout(send, TimeoutFuture::new(timeout_ms), timeout_ms).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{REQUEST_TIMEOUT_MS, WEBHOOK_URL};
    use futures::executor::block_on;
    use futures::future::{pending, ready};

    #[test]
    fn only_2xx_is_delivered() {
        assert_eq!(check_status(200), Ok(()));
        assert_eq!(check_status(204), Ok(()));
        assert_eq!(check_status(299), Ok(()));
        assert_eq!(check_status(302), Err(SubmissionError::Status(302)));
        assert_eq!(check_status(404), Err(SubmissionError::Status(404)));
        assert_eq!(check_status(500), Err(SubmissionError::Status(500)));
    }

    #[test]
    fn expired_timer_maps_to_timeout() {
        let never = pending::<Result<(), SubmissionError>>();
        let result = block_on(race_timeout(never, ready(()), 15_000));
        assert_eq!(result, Err(SubmissionError::Timeout(15_000)));
    }

    #[test]
    fn answer_before_timer_is_passed_through() {
        let result = block_on(race_timeout(ready(Ok(())), pending::<()>(), 15_000));
        assert_eq!(result, Ok(()));

        let failed = ready(Err(SubmissionError::Status(500)));
        let result = block_on(race_timeout(failed, pending::<()>(), 15_000));
        assert_eq!(result, Err(SubmissionError::Status(500)));
    }

    #[test]
    fn default_sink_targets_configured_webhook() {
        let sink = WebhookSink::default();
        assert_eq!(sink.url, WEBHOOK_URL);
        assert_eq!(sink.timeout_ms, REQUEST_TIMEOUT_MS);
    }
}
