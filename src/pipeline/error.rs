use thiserror::Error;

use crate::cancel::Cancelled;
use crate::dataset::DatasetRole;

#[derive(Debug, Error)]
/// Structural failures that stop the pipeline before or during a run.
///
/// Per-record resolution failures are never errors; they are returned in the
/// outcome's error lists.
pub enum PipelineError {
    /// The configured address column does not exist in the dataset.
    #[error("{role} address column {index} out of range ({width} columns)")]
    InvalidColumn {
        /// Which dataset was misconfigured.
        role: DatasetRole,
        /// The requested column index.
        index: usize,
        /// The dataset's column count.
        width: usize,
    },

    /// The run was cancelled at a suspension point.
    #[error("run cancelled")]
    Cancelled,
}

impl From<Cancelled> for PipelineError {
    fn from(_: Cancelled) -> Self {
        Self::Cancelled
    }
}
