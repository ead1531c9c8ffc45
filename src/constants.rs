//! # Wrapper Constants
//!
//! Wire-format constants for the executable trailer and fixed tokens used
//! during runtime discovery. The trailer values are part of the external
//! binary format and must never change between releases: executables wrapped
//! by one version of the tool are read back by the stubs of every later one.

/// Magic number marking the trailer of a wrapped executable.
///
/// Stored big-endian in the 4 bytes preceding the length field at the very
/// end of the file. A mismatch means the file was never wrapped (or has been
/// corrupted or truncated past recognition).
pub const TRAILER_MAGIC: u32 = 0xBADC0FEE;

/// Size of the fixed trailer frame: 4-byte magic + 2-byte payload length.
pub const TRAILER_FRAME_LEN: usize = 4 + 2;

/// Maximum length of a serialized configuration payload.
///
/// The frame stores the payload length as an unsigned 16-bit integer, so a
/// single trailer cannot describe more than this many bytes. Writes reject
/// larger payloads outright rather than truncating the length field, which
/// would produce an executable that can never be read back.
pub const MAX_TRAILER_PAYLOAD: usize = u16::MAX as usize;

/// Marker preceding the version number on the first line of `java -version`
/// output, e.g. `openjdk version "11.0.2" 2019-01-15`.
pub const VERSION_MARKER: &str = "version ";

/// Default minimum runtime major version applied at wrap time when the
/// packaging actor does not request one.
pub const DEFAULT_MINIMUM_VERSION: u64 = 16;
