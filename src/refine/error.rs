use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by routing transport.
///
/// A failed routing call leaves the pair's route distance unset; it is never
/// a run-level error.
pub enum RefineError {
    /// The HTTP client could not be constructed.
    #[error("failed to build routing client: {message}")]
    ClientBuild {
        /// Error message.
        message: String,
    },

    /// The request failed at the transport level (connect, timeout, ...).
    #[error("routing request failed: {message}")]
    RequestFailed {
        /// Error message.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("routing request returned status {status}")]
    BadStatus {
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be interpreted.
    #[error("malformed routing payload: {message}")]
    MalformedPayload {
        /// Error message.
        message: String,
    },
}
