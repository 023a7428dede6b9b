//! Minimum-interval spacing between real network calls.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Enforces a minimum gap between consecutive real network calls.
///
/// One pacer is shared per run across the geocoding and routing clients, so
/// the spacing holds process-wide regardless of which service is being called.
/// Cache hits never touch the pacer. Access is strictly sequential (the
/// pipeline is a single logical thread of control), so the lock is only there
/// to let clients hold the pacer behind `&self`.
#[derive(Debug)]
pub struct CallPacer {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl CallPacer {
    /// Creates a pacer with the given minimum spacing.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    /// Returns the configured minimum spacing.
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Waits until at least `min_interval` has passed since the previous
    /// real call, then records the current instant as the new call time.
    ///
    /// Call this immediately before issuing a real (non-cached) request.
    pub async fn pace(&self) {
        let wait = {
            let last = self.last_call.lock();
            last.map(|t| self.min_interval.saturating_sub(t.elapsed()))
                .unwrap_or(Duration::ZERO)
        };

        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }

        *self.last_call.lock() = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_call_does_not_wait() {
        let pacer = CallPacer::new(Duration::from_secs(5));

        let start = Instant::now();
        pacer.pace().await;

        assert!(start.elapsed() < Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_back_to_back_calls_are_spaced() {
        let pacer = CallPacer::new(Duration::from_millis(50));

        pacer.pace().await;
        let start = Instant::now();
        pacer.pace().await;

        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_elapsed_interval_is_not_re_waited() {
        let pacer = CallPacer::new(Duration::from_millis(20));

        pacer.pace().await;
        tokio::time::sleep(Duration::from_millis(30)).await;

        let start = Instant::now();
        pacer.pace().await;
        assert!(start.elapsed() < Duration::from_millis(15));
    }
}
