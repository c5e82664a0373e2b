//! Authorization wait loop
//!
//! Bridges the human-mediated approval step (a Telegram prompt) to the
//! synchronous push flow: poll the proxy at a fixed interval until the
//! credential shows up or the timeout elapses. The interval also
//! rate-limits the proxy; the loop never polls faster than it.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;

/// Polling configuration for the wait loop
#[derive(Debug, Clone)]
pub struct WaitConfig {
    pub poll_interval: Duration,
    pub timeout: Duration,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(3),
            timeout: Duration::from_secs(120),
        }
    }
}

/// Poll `probe` until it reports true or the timeout elapses.
///
/// The first probe runs immediately; a success on it returns without any
/// sleep. Returns false on timeout. Total wall time is bounded by
/// `timeout + poll_interval`.
pub async fn wait_for_authorization<F, Fut>(config: &WaitConfig, probe: F) -> bool
where
    F: Fn() -> Fut,
    Fut: Future<Output = bool>,
{
    let started = Instant::now();
    let deadline = started + config.timeout;

    loop {
        if probe().await {
            return true;
        }

        if Instant::now() >= deadline {
            return false;
        }

        let elapsed = started.elapsed().as_secs();
        tracing::debug!("Still waiting for authorization ({elapsed}s elapsed)");
        println!("   Waiting... ({elapsed}s)");
        tokio::time::sleep(config.poll_interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fast_config() -> WaitConfig {
        WaitConfig {
            poll_interval: Duration::from_secs(3),
            timeout: Duration::from_secs(120),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_poll_success_probes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let probe_calls = calls.clone();

        let authorized = wait_for_authorization(&fast_config(), move || {
            let calls = probe_calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                true
            }
        })
        .await;

        assert!(authorized);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_after_one_interval() {
        let calls = Arc::new(AtomicUsize::new(0));
        let probe_calls = calls.clone();

        let started = Instant::now();
        let authorized = wait_for_authorization(&fast_config(), move || {
            let calls = probe_calls.clone();
            async move { calls.fetch_add(1, Ordering::SeqCst) >= 1 }
        })
        .await;

        assert!(authorized);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        // One sleep between the two probes
        assert_eq!(started.elapsed(), Duration::from_secs(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_when_never_authorized() {
        let started = Instant::now();
        let authorized = wait_for_authorization(&fast_config(), || async { false }).await;

        assert!(!authorized);
        // Bounded by timeout + one poll interval
        assert!(started.elapsed() >= Duration::from_secs(120));
        assert!(started.elapsed() <= Duration::from_secs(123));
    }

    #[tokio::test(start_paused = true)]
    async fn test_polls_are_interval_limited() {
        let calls = Arc::new(AtomicUsize::new(0));
        let probe_calls = calls.clone();

        wait_for_authorization(&fast_config(), move || {
            let calls = probe_calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                false
            }
        })
        .await;

        // 120s timeout / 3s interval: the immediate probe plus one per sleep
        assert_eq!(calls.load(Ordering::SeqCst), 41);
    }
}
