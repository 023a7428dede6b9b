use thiserror::Error;

#[derive(Debug, Error)]
/// Errors raised while loading or validating configuration.
pub enum ConfigError {
    /// A numeric environment variable did not parse.
    #[error("invalid value '{value}' for {var}: {source}")]
    InvalidNumber {
        /// Environment variable name.
        var: &'static str,
        /// Offending value.
        value: String,
        /// Parse error.
        source: std::num::ParseIntError,
    },

    /// The pacing interval was set to zero.
    #[error("minimum call interval must be greater than zero")]
    ZeroInterval,

    /// An endpoint URL was empty or whitespace.
    #[error("{var} must not be blank")]
    BlankUrl {
        /// Environment variable name.
        var: &'static str,
    },
}
