//! Cooperative cancellation for a pipeline run.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

/// Returned when a run observes cancellation at a suspension point.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("run cancelled")]
pub struct Cancelled;

/// Shared cancellation flag, checked before every external call.
///
/// Cloning yields a handle to the same flag. The base pipeline has no other
/// interruption mechanism; once a run passes its last external call it runs
/// to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation. Idempotent.
    pub fn cancel(&self) {
        // Release pairs with the Acquire load in is_cancelled.
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns `true` once [`cancel`](Self::cancel) has been called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Errors with [`Cancelled`] if cancellation has been requested.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}
