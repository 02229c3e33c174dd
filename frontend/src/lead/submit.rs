use std::future::Future;
use std::time::Duration;

use futures::future::{FutureExt, LocalBoxFuture};
use thiserror::Error;

use super::LeadRecord;
use crate::config;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Where a validated lead goes.
pub trait LeadSubmitter {
    fn submit(&self, lead: LeadRecord) -> LocalBoxFuture<'static, Result<(), SubmitError>>;
}

impl<F, Fut> LeadSubmitter for F
where
    F: Fn(LeadRecord) -> Fut,
    Fut: Future<Output = Result<(), SubmitError>> + 'static,
{
    fn submit(&self, lead: LeadRecord) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        self(lead).boxed_local()
    }
}

/// Placeholder used when the page is not wired to a lead backend: waits as
/// long as a round trip would, logs the lead and succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedSubmitter {
    latency: Duration,
}

impl SimulatedSubmitter {
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::with_latency(config::SIMULATED_SUBMIT_LATENCY)
    }
}

impl LeadSubmitter for SimulatedSubmitter {
    fn submit(&self, lead: LeadRecord) -> LocalBoxFuture<'static, Result<(), SubmitError>> {
        let latency = self.latency;
        async move {
            sleep(latency).await;
            log::info!("Form submitted: {:?}", lead);
            Ok(())
        }
        .boxed_local()
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(millis).await;
}

// Needs a tokio runtime; only tests drive the simulated submitter off the browser.
#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn lead() -> LeadRecord {
        LeadRecord {
            email: "jane@example.com".into(),
            first_name: "Jane".into(),
            last_name: String::new(),
            interests: None,
        }
    }

    #[test]
    fn simulated_submitter_defaults_to_configured_latency() {
        assert_eq!(SimulatedSubmitter::default().latency(), config::SIMULATED_SUBMIT_LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submitter_succeeds() {
        let submitter = SimulatedSubmitter::with_latency(Duration::from_millis(5));
        assert_eq!(submitter.submit(lead()).await, Ok(()));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_simulated_submits_overlap() {
        let submitter = SimulatedSubmitter::with_latency(Duration::from_millis(200));
        let started = tokio::time::Instant::now();

        let (first, second) = futures::join!(submitter.submit(lead()), submitter.submit(lead()));

        assert_eq!(first, Ok(()));
        assert_eq!(second, Ok(()));
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(200));
        assert!(elapsed < Duration::from_millis(400), "submits ran back to back: {:?}", elapsed);
    }

    #[test]
    fn closures_are_submitters() {
        let reject = |_lead: LeadRecord| async { Err::<(), _>(SubmitError::Rejected("duplicate email".into())) };
        let result = block_on(reject.submit(lead()));
        assert_eq!(result, Err(SubmitError::Rejected("duplicate email".into())));
        assert_eq!(
            result.unwrap_err().to_string(),
            "submission rejected: duplicate email"
        );
    }
}
