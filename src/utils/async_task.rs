use std::time::Duration;

use tokio::time::sleep;
use tokio::time::timeout;
use tracing::warn;

use crate::BackoffPolicy;
use crate::Error;
use crate::Result;

/// Runs `task` until it succeeds, retrying with exponential backoff capped
/// at the policy's max delay. Each attempt is bounded by the policy's
/// per-attempt timeout. After `max_retries` attempts the last error is
/// returned wrapped in [`Error::RetriesExhausted`].
pub(crate) async fn retry_with_timeout_and_backoff<F, T, P>(
    task: F,
    policy: BackoffPolicy,
) -> Result<P>
where
    F: Fn() -> T,                               // The type of the async function
    T: std::future::Future<Output = Result<P>>, // The future returned by the async function
{
    let timeout_duration = Duration::from_millis(policy.timeout_ms);
    let max_delay = Duration::from_millis(policy.max_delay_ms);
    let mut delay = Duration::from_millis(policy.base_delay_ms); // Initial delay
    let max_attempts = policy.max_retries.max(1);

    let mut attempts = 0;
    loop {
        attempts += 1;
        let error = match timeout(timeout_duration, task()).await {
            Ok(Ok(r)) => {
                return Ok(r); // Exit on success
            }
            Ok(Err(error)) => error,
            Err(_) => Error::AttemptTimeout(timeout_duration),
        };

        if attempts >= max_attempts {
            warn!("task failed after {} attempts: {:?}", attempts, error);
            return Err(Error::RetriesExhausted {
                attempts,
                last: Box::new(error),
            });
        }

        warn!("attempt {} failed: {:?}; retrying in {:?}", attempts, error, delay);
        sleep(delay).await;
        delay = (delay * 2).min(max_delay); // Exponential backoff (double the delay each time)
    }
}
