use thiserror::Error;

/// Errors surfaced synchronously by [`Scanner`](crate::Scanner) operations.
///
/// Read failures are deliberately absent here: they are recorded internally,
/// degrade the stream to exhausted, and are queried after the fact via
/// [`Scanner::last_error`](crate::Scanner::last_error).
#[derive(Debug, Error)]
pub enum ScanError {
    /// No token or match is available at the current position.
    #[error("no token available at the current position")]
    Exhausted,

    /// A delimiter or skip pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),
}
