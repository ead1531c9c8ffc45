//! Executable trailer codec.
//!
//! A wrapped executable is a native stub binary, the application archive, and
//! a configuration trailer concatenated into one file:
//!
//! ```text
//! +----------------+-----------------+---------+-------+--------+
//! |  stub binary   | archive payload | config  | magic | length |
//! |  (any size)    |   (any size)    | (N b)   | (4 b) | (2 b)  |
//! +----------------+-----------------+---------+-------+--------+
//! ```
//!
//! - Length is a big-endian u16 giving the config payload size
//! - Magic is the big-endian u32 [`TRAILER_MAGIC`] sentinel
//! - The config payload is a bincode-serialized [`LaunchManifest`]
//!
//! Both framing fields sit at the absolute end of the file, so the trailer is
//! recovered by seeking backward from EOF. Nothing in the file needs to know
//! how large the stub or the archive are; that is what lets an arbitrary
//! native binary be prefixed onto a variable-size payload with no index or
//! table of contents anywhere else.
//!
//! [`TRAILER_MAGIC`]: crate::constants::TRAILER_MAGIC

use crate::constants::{MAX_TRAILER_PAYLOAD, TRAILER_FRAME_LEN, TRAILER_MAGIC};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::debug;

/// Configuration container persisted in the trailer of a wrapped executable.
///
/// Built once at wrap time from the packaging actor's flags, serialized into
/// the trailer, and never mutated again. At launch time a fresh manifest is
/// decoded from the stub's own file and discarded once the runtime argument
/// vector has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchManifest {
    /// Version of the packaging tool that produced this manifest.
    /// Informational only.
    pub tool_version: String,
    /// True when the native stub was user-supplied rather than one of the
    /// built-in targets.
    pub custom_wrapper: bool,
    /// Runtime selection and tuning.
    pub runtime: RuntimeSpec,
    /// Wrapped application description.
    pub application: AppSpec,
}

/// Runtime requirements and tuning forwarded to the located installation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeSpec {
    /// Inclusive lower bound on the runtime major version; 0 means any.
    pub minimum_version: u64,
    /// Inclusive upper bound on the runtime major version; 0 means unbounded.
    pub maximum_version: u64,
    /// Initial heap size in bytes; 0 leaves the runtime default in place.
    pub initial_memory: u64,
    /// Maximum heap size in bytes; 0 leaves the runtime default in place.
    pub memory_limit: u64,
    /// Raw extra flags, space-delimited, forwarded verbatim.
    pub additional_arguments: String,
}

/// Application entry point description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSpec {
    /// Fully-qualified main class resolved inside the archive.
    pub main_class: String,
}

/// Serializes a manifest and appends it, magic, then length to `writer`.
///
/// Returns the payload length in bytes (the framing adds another
/// [`TRAILER_FRAME_LEN`]). Payloads beyond [`MAX_TRAILER_PAYLOAD`] are
/// rejected before anything is written; every later failure leaves the
/// destination partially written, and the caller must discard it.
pub fn write_trailer<W: Write>(writer: &mut W, manifest: &LaunchManifest) -> Result<usize> {
    let payload = bincode::serialize(manifest).map_err(|e| Error::WriteFailure {
        reason: format!("failed to encode configuration: {e}"),
    })?;

    if payload.len() > MAX_TRAILER_PAYLOAD {
        return Err(Error::WriteFailure {
            reason: format!(
                "configuration payload too large: {} bytes ({MAX_TRAILER_PAYLOAD} max)",
                payload.len()
            ),
        });
    }

    writer.write_all(&payload).map_err(write_failure)?;
    writer.write_all(&TRAILER_MAGIC.to_be_bytes()).map_err(write_failure)?;
    writer
        .write_all(&(payload.len() as u16).to_be_bytes())
        .map_err(write_failure)?;

    Ok(payload.len())
}

/// Recovers the manifest from the trailer of a wrapped executable.
///
/// Opens the file read-only, validates the frame at EOF, then seeks backward
/// to the payload. The handle is scoped to this call and released on every
/// path, including early validation failures.
pub fn read_trailer(target: &Path) -> Result<LaunchManifest> {
    let mut file = File::open(target)?;

    let file_len = file.metadata()?.len();
    if file_len < TRAILER_FRAME_LEN as u64 {
        return Err(Error::TruncatedFile);
    }

    file.seek(SeekFrom::End(-(TRAILER_FRAME_LEN as i64)))?;

    let mut frame = [0u8; TRAILER_FRAME_LEN];
    file.read_exact(&mut frame).map_err(eof_as_truncation)?;

    let magic = u32::from_be_bytes([frame[0], frame[1], frame[2], frame[3]]);
    if magic != TRAILER_MAGIC {
        return Err(Error::NotAWrappedExecutable);
    }

    let payload_len = u16::from_be_bytes([frame[4], frame[5]]) as u64;
    if file_len < payload_len + TRAILER_FRAME_LEN as u64 {
        return Err(Error::TruncatedFile);
    }

    file.seek(SeekFrom::End(-((payload_len + TRAILER_FRAME_LEN as u64) as i64)))?;

    let mut payload = vec![0u8; payload_len as usize];
    file.read_exact(&mut payload).map_err(eof_as_truncation)?;

    let manifest: LaunchManifest =
        bincode::deserialize(&payload).map_err(|e| Error::CorruptTrailer {
            reason: e.to_string(),
        })?;

    debug!(
        "decoded trailer from {}: {} payload bytes, tool version {}",
        target.display(),
        payload_len,
        manifest.tool_version
    );

    Ok(manifest)
}

fn write_failure(err: io::Error) -> Error {
    Error::WriteFailure {
        reason: err.to_string(),
    }
}

fn eof_as_truncation(err: io::Error) -> Error {
    match err.kind() {
        io::ErrorKind::UnexpectedEof => Error::TruncatedFile,
        _ => Error::Io(err),
    }
}
