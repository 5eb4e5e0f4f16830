//! Error types for legenda operations.
//!
//! The extraction pipeline deliberately treats "nothing matched" as data, not
//! as an error: a listing with unparsable entries yields fewer entries and a
//! content page with no matching root yields an empty fragment. The variants
//! here cover the failures that genuinely stop an operation: transport,
//! malformed URLs, invalid selector strings, and profile files that cannot be
//! read or decoded.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog and content operations.
#[derive(Error, Debug)]
pub enum LegendaError {
    /// HTTP request errors from reqwest.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout.
    #[cfg(feature = "fetch")]
    #[error("request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// A URL that cannot be parsed or joined.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// An invalid CSS selector string.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),

    /// A site profile file that cannot be decoded.
    #[error("invalid site profile {path}: {reason}")]
    InvalidProfile { path: PathBuf, reason: String },

    /// No registered site profile under the requested name.
    #[error("unknown site: {0}")]
    UnknownSite(String),

    /// File I/O while loading site profiles.
    #[error("profile I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for [`LegendaError`].
pub type Result<T> = std::result::Result<T, LegendaError>;
