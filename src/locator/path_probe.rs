//! Search-path probing.
//!
//! Universal fallback strategy: spawn the launcher by name through the
//! process search path with a version-query flag and parse the banner it
//! prints on its diagnostic stream, e.g.
//!
//! ```text
//! openjdk version "11.0.2" 2019-01-15
//! ```
//!
//! Only the major version component is extracted; the probed name itself
//! remains the way to reach the installation, so this strategy resolves no
//! home directory.

use crate::constants::VERSION_MARKER;
use crate::error::{Error, Result};
use crate::locator::check_version_range;
use std::process::Command;
use tracing::debug;

/// Version-query flag understood by every launcher generation.
const VERSION_FLAG: &str = "-version";

/// Probes `executable_name` from the search path and validates its major
/// version against `[minimum_version, maximum_version]`.
///
/// Returns the major version on success. A launcher that cannot be spawned
/// at all reports [`Error::NotFound`]; one that runs but produces no usable
/// banner reports [`Error::InvalidInstallation`].
pub fn probe(executable_name: &str, minimum_version: u64, maximum_version: u64) -> Result<u64> {
    let output = Command::new(executable_name)
        .arg(VERSION_FLAG)
        .output()
        .map_err(|_| Error::NotFound)?;

    // The version banner is printed on stderr.
    let banner = String::from_utf8_lossy(&output.stderr);
    let Some(line) = banner.lines().next() else {
        return Err(Error::InvalidInstallation {
            reason: "runtime process did not provide version information".to_string(),
        });
    };

    if !output.status.success() {
        return Err(Error::InvalidInstallation {
            reason: "runtime process terminated abnormally".to_string(),
        });
    }

    let major_version = parse_version_line(line)?;
    debug!("search path launcher {executable_name} reports major version {major_version}");

    check_version_range(major_version, minimum_version, maximum_version)?;
    Ok(major_version)
}

/// Extracts the major version from the first banner line.
///
/// Scans for the fixed `version ` marker, strips one optional leading quote,
/// and parses everything before the first `.` as the major component.
pub(crate) fn parse_version_line(line: &str) -> Result<u64> {
    let offset = line
        .find(VERSION_MARKER)
        .ok_or_else(|| Error::InvalidInstallation {
            reason: "version information is missing the version number".to_string(),
        })?;

    let mut version = &line[offset + VERSION_MARKER.len()..];
    version = version.strip_prefix('"').unwrap_or(version);

    let (major, _) = version
        .split_once('.')
        .ok_or_else(|| Error::InvalidInstallation {
            reason: "runtime process did not provide valid version information".to_string(),
        })?;

    major.parse().map_err(|e| Error::InvalidInstallation {
        reason: format!("runtime process did not provide valid version information ({e})"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_banner() {
        let line = "openjdk version \"11.0.2\" 2019-01-15";
        assert_eq!(parse_version_line(line).unwrap(), 11);
    }

    #[test]
    fn test_parse_unquoted_banner() {
        assert_eq!(parse_version_line("java version 1.8.0_292").unwrap(), 1);
    }

    #[test]
    fn test_marker_missing() {
        assert!(matches!(
            parse_version_line("no such launcher"),
            Err(Error::InvalidInstallation { .. })
        ));
    }

    #[test]
    fn test_version_without_separator_rejected() {
        assert!(matches!(
            parse_version_line("openjdk version \"17\""),
            Err(Error::InvalidInstallation { .. })
        ));
    }

    #[test]
    fn test_non_numeric_major_rejected() {
        assert!(matches!(
            parse_version_line("openjdk version \"next.0\""),
            Err(Error::InvalidInstallation { .. })
        ));
    }
}
