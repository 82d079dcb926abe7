//! Bounded fixed-interval retry.

use std::future::Future;
use std::time::Duration;

/// How often and how many times to re-attempt a failing operation.
///
/// Fixed interval only: no jitter, no backoff growth.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total number of attempts, including the first one.
    pub attempts: u32,
    /// Fixed delay between consecutive attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            delay: Duration::from_secs(5),
        }
    }
}

/// Run `op` until it succeeds or the policy's attempts are exhausted,
/// sleeping the fixed delay between attempts. Returns the last error on
/// exhaustion.
pub async fn retry<T, E, F, Fut>(policy: &RetryPolicy, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < policy.attempts => {
                tracing::warn!(
                    attempt,
                    remaining = policy.attempts - attempt,
                    error = %err,
                    "attempt failed, retrying in {:?}",
                    policy.delay
                );
                tokio::time::sleep(policy.delay).await;
            }
            Err(err) => {
                tracing::error!(attempt, error = %err, "retries exhausted");
                return Err(err);
            }
        }
    }
}
