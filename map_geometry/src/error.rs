//! Error types for map geometry
//!
//! Only the checked constructors (`try_*`) return these. The query
//! operations themselves never fail: geometric degeneracies are reported
//! through their return values instead.

use std::fmt;

/// Result type for map geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Map geometry errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Box corners are not component-wise ordered or not finite
    InvalidBounds(String),

    /// Ray direction is zero-length or not finite
    InvalidRay(String),

    /// Projection yields a degenerate frustum (w = 0, collinear plane points, ...)
    DegenerateProjection(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBounds(msg) => write!(f, "Invalid bounds: {}", msg),
            Error::InvalidRay(msg) => write!(f, "Invalid ray: {}", msg),
            Error::DegenerateProjection(msg) => write!(f, "Degenerate projection: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an error at ERROR severity and hand it back (internal use).
///
/// Every checked constructor routes its failures through here so they
/// show up in the installed logger with a source tag.
pub(crate) fn log_and_return(source: &str, error: Error) -> Error {
    crate::geo_error!(source, "{}", error);
    error
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
