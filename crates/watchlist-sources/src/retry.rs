use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Never less than 1.
    pub max_attempts: u32,
    /// Fixed pause between attempts. `None` retries immediately.
    pub delay: Option<Duration>,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

#[derive(Debug)]
pub enum RetryOutcome<T, E> {
    Success { value: T, attempts: u32 },
    Exhausted { error: E, attempts: u32 },
}

impl<T, E> RetryOutcome<T, E> {
    pub fn into_result(self) -> Result<T, E> {
        match self {
            RetryOutcome::Success { value, .. } => Ok(value),
            RetryOutcome::Exhausted { error, .. } => Err(error),
        }
    }
}

/// Run `attempt` until it succeeds or `policy.max_attempts` is reached.
///
/// `attempt` receives the 1-based attempt number. `on_exhausted` runs exactly once,
/// with the last error, only when every attempt failed.
pub async fn retry<T, E, F, Fut, H>(policy: &RetryPolicy, mut attempt: F, on_exhausted: H) -> RetryOutcome<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
    H: FnOnce(&E, u32),
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempts = 0;

    loop {
        attempts += 1;
        match attempt(attempts).await {
            Ok(value) => return RetryOutcome::Success { value, attempts },
            Err(error) => {
                if attempts >= max_attempts {
                    on_exhausted(&error, attempts);
                    return RetryOutcome::Exhausted { error, attempts };
                }
                debug!(attempt = attempts, max_attempts, error = %error, "Attempt failed, retrying");
                if let Some(delay) = policy.delay {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }
}
