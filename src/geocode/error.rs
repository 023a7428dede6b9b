use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by geocoding transport.
///
/// At the lookup-client level every variant collapses to "no result" for the
/// offending query; the error only surfaces in logs.
pub enum GeocodeError {
    /// The HTTP client could not be constructed.
    #[error("failed to build geocoding client: {message}")]
    ClientBuild {
        /// Error message.
        message: String,
    },

    /// The request failed at the transport level (connect, timeout, ...).
    #[error("geocoding request for '{query}' failed: {message}")]
    RequestFailed {
        /// The query that was being looked up.
        query: String,
        /// Error message.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("geocoding request for '{query}' returned status {status}")]
    BadStatus {
        /// The query that was being looked up.
        query: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be interpreted.
    #[error("malformed geocoding payload for '{query}': {message}")]
    MalformedPayload {
        /// The query that was being looked up.
        query: String,
        /// Error message.
        message: String,
    },
}
