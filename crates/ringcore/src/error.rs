//! Error types for the ring library.

use thiserror::Error;

/// Result type alias for the ring library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the ring library.
///
/// Membership changes never fail; only lookups against an empty ring and
/// construction from bad configuration produce errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Lookup attempted while the ring has no members.
    #[error("ring has no members")]
    EmptyRing,
    /// Ring parameters were rejected at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Configuration input could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}
