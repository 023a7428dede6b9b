//! Progress reporting hooks.
//!
//! Sinks run synchronously between suspension points and must not block or
//! influence control flow.

use std::fmt;

/// Coarse pipeline phases, reported once each as the run advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Resolving requester addresses to coordinates.
    ResolvingRequesters,
    /// Resolving provider addresses to coordinates.
    ResolvingProviders,
    /// Building and ranking the full distance matrix.
    ComputingDistances,
    /// Refining the top-ranked pairs with route distances.
    RefiningRoutes,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolvingRequesters => write!(f, "resolving requester addresses"),
            Self::ResolvingProviders => write!(f, "resolving provider addresses"),
            Self::ComputingDistances => write!(f, "computing distances"),
            Self::RefiningRoutes => write!(f, "refining routes"),
        }
    }
}

/// Receives phase transitions and per-record progress.
pub trait ProgressSink {
    /// Called once when a new phase begins.
    fn phase(&mut self, phase: Phase);

    /// Called before each resolution attempt: `index` is zero-based,
    /// `total` counts the dataset's rows, `address` is the raw field value.
    fn record(&mut self, index: usize, total: usize, address: &str);
}

/// Sink that discards all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn phase(&mut self, _phase: Phase) {}
    fn record(&mut self, _index: usize, _total: usize, _address: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display_is_human_readable() {
        assert_eq!(
            Phase::ResolvingRequesters.to_string(),
            "resolving requester addresses"
        );
        assert_eq!(Phase::RefiningRoutes.to_string(), "refining routes");
    }

    #[test]
    fn test_null_progress_accepts_everything() {
        let mut sink = NullProgress;
        sink.phase(Phase::ComputingDistances);
        sink.record(0, 10, "Via Roma 1");
    }
}
