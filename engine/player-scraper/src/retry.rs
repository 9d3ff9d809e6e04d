//! Rate-limit backoff and inter-request pacing

use crate::error::FetchError;
use rand::Rng;
use std::future::Future;
use std::ops::RangeInclusive;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// Exponential backoff on rate limiting plus a randomized pause between requests
#[derive(Debug, Clone)]
pub struct BackoffPolicy {
    max_attempts: u32,
    base_delay: Duration,
    pacing: RangeInclusive<Duration>,
}

impl BackoffPolicy {
    pub fn new(max_attempts: u32, base_delay: Duration, pacing: RangeInclusive<Duration>) -> Self {
        Self { max_attempts, base_delay, pacing }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn pacing(&self) -> &RangeInclusive<Duration> {
        &self.pacing
    }

    /// Delay after the zero-based `attempt` was rate limited: `base * 2^attempt`
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(2u32.saturating_pow(attempt))
    }

    /// Uniformly random pause from the pacing range
    pub fn pacing_delay(&self) -> Duration {
        let (min, max) = (*self.pacing.start(), *self.pacing.end());
        if min >= max {
            return min;
        }
        rand::thread_rng().gen_range(min..=max)
    }
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self::new(5, Duration::from_secs(1), Duration::from_secs(3)..=Duration::from_secs(7))
    }
}

/// Run `op`, retrying only while it reports [`FetchError::RateLimited`]
///
/// Every rate-limited attempt sleeps its backoff delay, the last one included,
/// before the next attempt or before giving up.
pub async fn with_backoff<T, F, Fut>(policy: &BackoffPolicy, mut op: F) -> Result<T, FetchError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    for attempt in 0..policy.max_attempts {
        match op().await {
            Err(FetchError::RateLimited) => {
                let delay = policy.backoff_delay(attempt);
                warn!("Rate limited. Retrying in {} seconds...", delay.as_secs_f64());
                sleep(delay).await;
            }
            other => return other,
        }
    }

    Err(FetchError::RetriesExhausted { attempts: policy.max_attempts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;
    use std::cell::Cell;
    use tokio::time::Instant;

    #[test]
    fn test_backoff_delays_double() {
        let policy = BackoffPolicy::default();
        let delays: Vec<u64> = (0..5).map(|a| policy.backoff_delay(a).as_secs()).collect();
        assert_eq!(delays, vec![1, 2, 4, 8, 16]);
    }

    #[test]
    fn test_pacing_delay_within_range() {
        let policy = BackoffPolicy::default();
        for _ in 0..100 {
            let delay = policy.pacing_delay();
            assert!(delay >= Duration::from_secs(3) && delay <= Duration::from_secs(7));
        }

        let fixed = BackoffPolicy::new(1, Duration::ZERO, Duration::from_secs(2)..=Duration::from_secs(2));
        assert_eq!(fixed.pacing_delay(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limited_sleeps_full_schedule_then_gives_up() {
        let policy = BackoffPolicy::default();
        let calls = Cell::new(0u32);
        let started = Instant::now();

        let result: Result<(), _> = with_backoff(&policy, || {
            calls.set(calls.get() + 1);
            async { Err(FetchError::RateLimited) }
        })
        .await;

        assert!(matches!(result, Err(FetchError::RetriesExhausted { attempts: 5 })));
        assert_eq!(calls.get(), 5);
        // 1 + 2 + 4 + 8 + 16
        assert_eq!(started.elapsed(), Duration::from_secs(31));
    }

    #[tokio::test(start_paused = true)]
    async fn test_recovers_after_rate_limit() {
        let policy = BackoffPolicy::default();
        let calls = Cell::new(0u32);
        let started = Instant::now();

        let result = with_backoff(&policy, || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n < 3 {
                    Err(FetchError::RateLimited)
                } else {
                    Ok("page")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "page");
        assert_eq!(calls.get(), 3);
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_other_http_errors_abort_immediately() {
        let policy = BackoffPolicy::default();
        let calls = Cell::new(0u32);
        let started = Instant::now();

        let result: Result<(), _> = with_backoff(&policy, || {
            calls.set(calls.get() + 1);
            async { Err(FetchError::Http(StatusCode::INTERNAL_SERVER_ERROR)) }
        })
        .await;

        assert!(matches!(result, Err(FetchError::Http(StatusCode::INTERNAL_SERVER_ERROR))));
        assert_eq!(calls.get(), 1);
        assert_eq!(started.elapsed(), Duration::ZERO);
    }
}
