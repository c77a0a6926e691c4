//! Narrator wrapper with exponential backoff retry
//!
//! Local model servers drop connections while loading weights and reasoning
//! models sometimes ramble past the JSON they were asked for. Both are worth
//! another try; auth and malformed-request failures are not.

use async_trait::async_trait;
use dragonbane_domain::Character;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{NarrativeSummary, Narrator, NarratorError};

/// Configuration for retry behavior
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Retries after the first attempt (0 = the initial attempt only)
    pub max_retries: u32,
    /// Base delay in milliseconds before first retry
    pub base_delay_ms: u64,
    /// Maximum delay in milliseconds (caps exponential growth)
    pub max_delay_ms: u64,
    /// Jitter factor (0.0-1.0) applied as +/- around the delay
    pub jitter_factor: f64,
}

impl Default for RetryConfig {
    /// Three attempts in total.
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 1000,
            max_delay_ms: 30000,
            jitter_factor: 0.2,
        }
    }
}

impl RetryConfig {
    pub fn total_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Delay before retry number `attempt` (1-based): `base * 2^(attempt-1)`,
    /// capped, then jittered.
    pub fn delay_for(&self, attempt: u32) -> u64 {
        let exponential = self
            .base_delay_ms
            .saturating_mul(2u64.saturating_pow(attempt.saturating_sub(1)));
        let capped = exponential.min(self.max_delay_ms);

        let jitter_range = (capped as f64 * self.jitter_factor.clamp(0.0, 1.0)) as i64;
        if jitter_range > 0 {
            let jitter = rand::thread_rng().gen_range(-jitter_range..=jitter_range);
            (capped as i64 + jitter).max(0) as u64
        } else {
            capped
        }
    }
}

/// Whether another attempt could plausibly succeed.
pub fn is_retryable(error: &NarratorError) -> bool {
    match error {
        NarratorError::RequestFailed(msg) => {
            !msg.contains("401")
                && !msg.contains("403")
                && !msg.contains("400")
                && !msg.contains("Invalid")
        }
        NarratorError::InvalidResponse(_) | NarratorError::Unparseable(_) => true,
    }
}

/// Wrapper that adds retry logic to any narrator
pub struct ResilientNarrator {
    inner: Arc<dyn Narrator>,
    config: RetryConfig,
}

impl ResilientNarrator {
    pub fn new(inner: Arc<dyn Narrator>, config: RetryConfig) -> Self {
        Self { inner, config }
    }
}

#[async_trait]
impl Narrator for ResilientNarrator {
    async fn describe(&self, character: &Character) -> Result<NarrativeSummary, NarratorError> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match self.inner.describe(character).await {
                Ok(summary) => {
                    if attempt > 0 {
                        tracing::info!(
                            attempt = attempt + 1,
                            character_id = %character.id,
                            "Narrative request succeeded after retry"
                        );
                    }
                    return Ok(summary);
                }
                Err(e) => {
                    if !is_retryable(&e) {
                        tracing::error!(
                            error = %e,
                            character_id = %character.id,
                            "Narrative request failed with non-retryable error"
                        );
                        return Err(e);
                    }

                    if attempt < self.config.max_retries {
                        let delay = self.config.delay_for(attempt + 1);
                        tracing::warn!(
                            attempt = attempt + 1,
                            max_retries = self.config.max_retries,
                            delay_ms = delay,
                            error = %e,
                            "Narrative request failed, retrying..."
                        );
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                    }
                    last_error = Some(e);
                }
            }
        }

        let error = last_error
            .unwrap_or_else(|| NarratorError::RequestFailed("Unknown error".to_string()));
        tracing::error!(
            attempts = self.config.total_attempts(),
            error = %error,
            "Narrative request failed after all retry attempts"
        );
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockNarrator;
    use crate::test_fixtures::sample_character;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fast(max_retries: u32) -> RetryConfig {
        RetryConfig {
            max_retries,
            base_delay_ms: 1,
            max_delay_ms: 10,
            jitter_factor: 0.0,
        }
    }

    fn summary() -> NarrativeSummary {
        NarrativeSummary {
            name: "Ilsa Marr".into(),
            appearance: "Weathered.".into(),
            background: "A river pilot.".into(),
        }
    }

    /// Narrator that fails `failures` times with `error`, then succeeds.
    fn flaky(failures: u32, error: NarratorError) -> (MockNarrator, Arc<AtomicU32>) {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&calls);
        let mut mock = MockNarrator::new();
        mock.expect_describe().returning(move |_| {
            let call = counter.fetch_add(1, Ordering::SeqCst);
            if call < failures {
                Err(error.clone())
            } else {
                Ok(summary())
            }
        });
        (mock, calls)
    }

    #[tokio::test]
    async fn succeeds_without_retry() {
        let (mock, calls) = flaky(0, NarratorError::RequestFailed("unused".into()));
        let narrator = ResilientNarrator::new(Arc::new(mock), fast(2));

        let result = narrator.describe(&sample_character()).await.unwrap();
        assert_eq!(result, summary());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_unparseable_output() {
        let (mock, calls) = flaky(2, NarratorError::Unparseable("rambling".into()));
        let narrator = ResilientNarrator::new(Arc::new(mock), fast(2));

        assert!(narrator.describe(&sample_character()).await.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn gives_up_after_all_attempts() {
        let (mock, calls) = flaky(10, NarratorError::RequestFailed("connection reset".into()));
        let narrator = ResilientNarrator::new(Arc::new(mock), fast(2));

        let err = narrator.describe(&sample_character()).await.unwrap_err();
        assert!(matches!(err, NarratorError::RequestFailed(_)));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn auth_errors_are_not_retried() {
        let (mock, calls) = flaky(10, NarratorError::RequestFailed("401: Unauthorized".into()));
        let narrator = ResilientNarrator::new(Arc::new(mock), fast(3));

        assert!(narrator.describe(&sample_character()).await.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn backoff_doubles_until_capped() {
        let config = RetryConfig {
            max_retries: 5,
            base_delay_ms: 1000,
            max_delay_ms: 30000,
            jitter_factor: 0.0,
        };
        let delays: Vec<u64> = (1..=6).map(|attempt| config.delay_for(attempt)).collect();
        assert_eq!(delays, vec![1000, 2000, 4000, 8000, 16000, 30000]);
    }

    #[test]
    fn jitter_stays_in_band() {
        let config = RetryConfig {
            jitter_factor: 0.2,
            ..RetryConfig::default()
        };
        for _ in 0..50 {
            let delay = config.delay_for(1);
            assert!((800..=1200).contains(&delay), "delay {delay} out of band");
        }
    }

    #[test]
    fn default_allows_three_attempts() {
        assert_eq!(RetryConfig::default().total_attempts(), 3);
    }
}
