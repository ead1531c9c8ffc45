//! Packaging and inspection.
//!
//! The packaging side assembles a wrapped executable: a native stub binary,
//! the application archive, and the configuration trailer, concatenated in
//! that order. Stubs are supplied through an injected [`StubCatalog`] so the
//! codec stays independent of how stub binaries are stored or embedded.
//!
//! The inspection side renders a recovered manifest as human-readable text,
//! formatting memory fields back through the size-suffix codec.

use crate::constants::TRAILER_FRAME_LEN;
use crate::error::{Error, Result};
use crate::suffix::format_bytes;
use crate::trailer::{write_trailer, LaunchManifest};
use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

/// Version of this packaging tool, recorded in every manifest it produces.
pub fn tool_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Read-only catalog of native stub binaries, keyed by target name
/// (e.g. `linux-amd64`, `windows-amd64`).
///
/// Callers populate the catalog from wherever their stubs live — embedded
/// assets, a directory on disk — and hand it to the packaging code. There is
/// no process-wide registry.
#[derive(Debug, Clone, Default)]
pub struct StubCatalog {
    stubs: BTreeMap<String, Vec<u8>>,
}

impl StubCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a stub binary under a target name, replacing any previous
    /// entry for that target.
    pub fn insert(&mut self, target: impl Into<String>, stub: Vec<u8>) {
        self.stubs.insert(target.into(), stub);
    }

    /// Stub bytes for a target.
    pub fn get(&self, target: &str) -> Result<&[u8]> {
        self.stubs
            .get(target)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::UnknownTarget(target.to_string()))
    }

    /// Target names in sorted order.
    pub fn targets(&self) -> impl Iterator<Item = &str> {
        self.stubs.keys().map(String::as_str)
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.stubs.len()
    }

    /// True when no targets are registered.
    pub fn is_empty(&self) -> bool {
        self.stubs.is_empty()
    }
}

impl FromIterator<(String, Vec<u8>)> for StubCatalog {
    fn from_iter<I: IntoIterator<Item = (String, Vec<u8>)>>(iter: I) -> Self {
        Self {
            stubs: iter.into_iter().collect(),
        }
    }
}

/// Writes a complete wrapped executable: stub, archive, trailer.
///
/// Returns the total number of bytes written. Any failure leaves the
/// destination partially written; the caller must discard it.
pub fn write_wrapped<W: Write>(
    writer: &mut W,
    stub: &[u8],
    archive: &[u8],
    manifest: &LaunchManifest,
) -> Result<usize> {
    writer.write_all(stub).map_err(write_failure)?;
    writer.write_all(archive).map_err(write_failure)?;

    let payload_len = write_trailer(writer, manifest)?;

    Ok(stub.len() + archive.len() + payload_len + TRAILER_FRAME_LEN)
}

/// Assembles a wrapped executable at `output`, creating parent directories
/// as needed. On Unix the output is created executable (mode 0o755).
pub fn wrap_file(
    output: &Path,
    stub: &[u8],
    archive: &[u8],
    manifest: &LaunchManifest,
) -> Result<usize> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(write_failure)?;
        }
    }

    let mut options = OpenOptions::new();
    options.create(true).truncate(true).write(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o755);
    }

    let mut file = options.open(output).map_err(write_failure)?;
    let written = write_wrapped(&mut file, stub, archive, manifest)?;

    info!("wrapped executable at {} ({written} bytes)", output.display());
    Ok(written)
}

/// Renders every manifest field as human-readable text, the way an
/// inspection front end presents a wrapped executable.
pub fn render_info(manifest: &LaunchManifest) -> String {
    let mut out = String::new();

    out.push_str("==> tool metadata\n\n");
    out.push_str(&format!("          version: {}\n", manifest.tool_version));
    out.push_str(&format!(" custom generator: {}\n\n", manifest.custom_wrapper));

    out.push_str("==> runtime configuration\n\n");
    out.push_str(&format!(
        "      minimum version: {}\n",
        manifest.runtime.minimum_version
    ));
    out.push_str(&format!(
        "      maximum version: {}\n\n",
        manifest.runtime.maximum_version
    ));
    out.push_str(&format!(
        "       initial memory: {}\n",
        format_bytes(manifest.runtime.initial_memory)
    ));
    out.push_str(&format!(
        "         memory limit: {}\n",
        format_bytes(manifest.runtime.memory_limit)
    ));
    out.push_str(&format!(
        " additional arguments: {:?}\n\n",
        manifest.runtime.additional_arguments
    ));

    out.push_str("==> application configuration\n\n");
    out.push_str(&format!(" main class: {}\n", manifest.application.main_class));

    out
}

fn write_failure(err: io::Error) -> Error {
    Error::WriteFailure {
        reason: err.to_string(),
    }
}
