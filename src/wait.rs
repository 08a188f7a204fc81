//! Polling wait helpers.
//!
//! The one generic retry primitive in the suite: re-evaluate a condition
//! at a fixed interval until it holds or the budget runs out. A separate
//! exponential-backoff helper covers operations that are flaky at startup
//! (browser launch).

use crate::result::{ComprarError, ComprarResult};
use std::future::Future;
use std::time::{Duration, Instant};

/// Short tier, for quick UI updates like the cart badge (5 seconds)
pub const SHORT_TIMEOUT_MS: u64 = 5_000;

/// Medium tier, for in-page transitions (15 seconds)
pub const MEDIUM_TIMEOUT_MS: u64 = 15_000;

/// Long tier, for navigations and slow-rendering users (30 seconds)
pub const LONG_TIMEOUT_MS: u64 = 30_000;

/// Extra-long tier, for whole-flow budgets (60 seconds)
pub const EXTRA_LONG_TIMEOUT_MS: u64 = 60_000;

/// Default timeout for wait operations
pub const DEFAULT_WAIT_TIMEOUT_MS: u64 = LONG_TIMEOUT_MS;

/// Default polling interval (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Options for wait operations
#[derive(Debug, Clone, Copy)]
pub struct WaitOptions {
    /// Timeout in milliseconds
    pub timeout_ms: u64,
    /// Polling interval in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_WAIT_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl WaitOptions {
    /// Create wait options with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Short-tier budget ([`SHORT_TIMEOUT_MS`])
    #[must_use]
    pub fn short() -> Self {
        Self::default().with_timeout(SHORT_TIMEOUT_MS)
    }

    /// Medium-tier budget ([`MEDIUM_TIMEOUT_MS`])
    #[must_use]
    pub fn medium() -> Self {
        Self::default().with_timeout(MEDIUM_TIMEOUT_MS)
    }

    /// Long-tier budget ([`LONG_TIMEOUT_MS`])
    #[must_use]
    pub fn long() -> Self {
        Self::default().with_timeout(LONG_TIMEOUT_MS)
    }

    /// Extra-long-tier budget ([`EXTRA_LONG_TIMEOUT_MS`])
    #[must_use]
    pub fn extra_long() -> Self {
        Self::default().with_timeout(EXTRA_LONG_TIMEOUT_MS)
    }

    /// Set timeout in milliseconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Set polling interval in milliseconds
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Timeout as a [`Duration`]
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Poll interval as a [`Duration`]
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

/// Poll `condition` until it returns true or the timeout elapses.
///
/// # Errors
///
/// Returns [`ComprarError::Timeout`] when the budget is exhausted, or the
/// first error the condition itself produces.
pub async fn until<F, Fut>(opts: WaitOptions, mut condition: F) -> ComprarResult<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ComprarResult<bool>>,
{
    let start = Instant::now();
    loop {
        if condition().await? {
            return Ok(());
        }
        if start.elapsed() >= opts.timeout() {
            return Err(ComprarError::Timeout {
                ms: opts.timeout_ms,
            });
        }
        tokio::time::sleep(opts.poll_interval()).await;
    }
}

/// Retry an operation with exponential backoff.
///
/// The delay doubles after each failed attempt. The last error is
/// returned when the attempt budget is spent.
///
/// # Errors
///
/// Returns the final attempt's error.
pub async fn retry_with_backoff<T, F, Fut>(
    max_attempts: u32,
    initial_delay: Duration,
    mut op: F,
) -> ComprarResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ComprarResult<T>>,
{
    let mut delay = initial_delay;
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt >= max_attempts => return Err(err),
            Err(err) => {
                tracing::debug!(attempt, error = %err, "retrying after backoff");
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
        }
    }
}
