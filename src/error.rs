//! Error types for the wrapper and launcher layers.

/// Result type alias for wrapper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while wrapping, inspecting or launching an
/// application executable.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // =========================================================================
    // Runtime Location Errors
    // =========================================================================
    /// No candidate runtime installation was found at all.
    ///
    /// The only recoverable location failure: the locator falls back to its
    /// next strategy when it sees it.
    #[error("no matching runtime installation found")]
    NotFound,

    /// A runtime was found but its major version violates the requested range.
    ///
    /// A bound of 0 means unbounded on that side.
    #[error("unsupported runtime version: {found} found ({minimum} minimum, {maximum} maximum)")]
    UnsupportedVersion {
        found: u64,
        minimum: u64,
        maximum: u64,
    },

    /// A runtime installation exists but is malformed or unusable.
    #[error("invalid runtime installation: {reason}")]
    InvalidInstallation { reason: String },

    // =========================================================================
    // Trailer Errors
    // =========================================================================
    /// The magic number at the end of the file does not match.
    ///
    /// The primary signal that a file was never wrapped, or is corrupted.
    #[error("magic number mismatch: not a wrapped executable")]
    NotAWrappedExecutable,

    /// The trailer frame is intact but its payload failed to decode.
    #[error("failed to decode trailer configuration: {reason}")]
    CorruptTrailer { reason: String },

    /// The file is shorter than the trailer frame requires.
    #[error("file is too short to contain a trailer")]
    TruncatedFile,

    /// Writing the trailer or the surrounding executable failed.
    ///
    /// The destination is left partially written; the caller must discard it.
    #[error("failed to write wrapped executable: {reason}")]
    WriteFailure { reason: String },

    // =========================================================================
    // Size Suffix Errors
    // =========================================================================
    /// The trailing character of a byte-size string is not a known suffix.
    #[error("illegal size suffix: {0}")]
    InvalidSuffix(char),

    /// The numeric portion of a byte-size string does not parse.
    #[error("illegal size: {0:?}")]
    InvalidNumber(String),

    // =========================================================================
    // Packaging Errors
    // =========================================================================
    /// The requested wrapper target is not present in the stub catalog.
    #[error("unknown wrapper target: {0}")]
    UnknownTarget(String),

    // =========================================================================
    // I/O Errors
    // =========================================================================
    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
