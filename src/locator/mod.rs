//! Runtime discovery.
//!
//! Finds an installed Java runtime whose major version satisfies a requested
//! range. Two independent strategies run in sequence:
//!
//! 1. [`catalog`] — the platform installation catalog (the Windows registry).
//!    Compiled as an always-[`NotFound`] stub everywhere else.
//! 2. [`path_probe`] — spawn the conventional launcher from the process
//!    search path and parse its version banner.
//!
//! The fallback from 1 to 2 happens only on [`NotFound`]: a catalog entry
//! with the wrong version or a broken installation short-circuits, so a
//! version mismatch is never masked by probing a different installation.
//!
//! [`NotFound`]: crate::error::Error::NotFound

pub mod catalog;
pub mod path_probe;

use crate::error::{Error, Result};
use std::path::PathBuf;
use tracing::debug;

/// Conventional console launcher executable name.
#[cfg(target_os = "windows")]
pub const CLI_EXECUTABLE: &str = "java.exe";
/// Conventional console launcher executable name.
#[cfg(not(target_os = "windows"))]
pub const CLI_EXECUTABLE: &str = "java";

/// Launcher variant that suppresses the console window where the platform
/// distinguishes one.
#[cfg(target_os = "windows")]
pub const GUI_EXECUTABLE: &str = "javaw.exe";
/// Launcher variant that suppresses the console window where the platform
/// distinguishes one.
#[cfg(not(target_os = "windows"))]
pub const GUI_EXECUTABLE: &str = "java";

/// A resolved runtime installation.
///
/// Valid only for the duration of one launch attempt; nothing here is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaRuntime {
    /// Directory containing the runtime executables, or `None` when the
    /// installation was resolved through the process search path.
    pub home: Option<PathBuf>,
    /// Major version that satisfied the query.
    pub major_version: u64,
}

impl JavaRuntime {
    /// Path of a launcher executable within this installation.
    ///
    /// Search-path installations return the bare name so that process
    /// creation resolves it through the environment, exactly as the probe
    /// that validated it did.
    pub fn executable(&self, name: &str) -> PathBuf {
        match &self.home {
            Some(home) => home.join(name),
            None => PathBuf::from(name),
        }
    }

    /// True when this installation is resolved through the search path
    /// rather than a concrete home directory.
    pub fn is_search_path(&self) -> bool {
        self.home.is_none()
    }
}

/// Locates a runtime whose major version lies in `[minimum, maximum]`.
///
/// Either bound may be 0 to leave that side unbounded. Probing uses the
/// platform's conventional console launcher name.
pub fn locate(minimum_version: u64, maximum_version: u64) -> Result<JavaRuntime> {
    locate_with(CLI_EXECUTABLE, minimum_version, maximum_version)
}

/// [`locate`] with an explicit launcher name for the search-path probe.
pub fn locate_with(
    executable_name: &str,
    minimum_version: u64,
    maximum_version: u64,
) -> Result<JavaRuntime> {
    match catalog::find(minimum_version, maximum_version) {
        Ok(runtime) => {
            debug!(
                "catalog resolved runtime v{} at {:?}",
                runtime.major_version, runtime.home
            );
            Ok(runtime)
        }
        Err(Error::NotFound) => {
            debug!("no catalog entry, probing search path for {executable_name}");
            let major_version =
                path_probe::probe(executable_name, minimum_version, maximum_version)?;
            Ok(JavaRuntime {
                home: None,
                major_version,
            })
        }
        Err(err) => Err(err),
    }
}

/// Validates a found major version against an inclusive range, where 0 on
/// either side means unbounded.
pub(crate) fn check_version_range(found: u64, minimum: u64, maximum: u64) -> Result<()> {
    if found < minimum {
        return Err(Error::UnsupportedVersion {
            found,
            minimum,
            maximum,
        });
    }
    if maximum != 0 && found > maximum {
        return Err(Error::UnsupportedVersion {
            found,
            minimum,
            maximum,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_range_bounds_are_inclusive() {
        assert!(check_version_range(11, 11, 11).is_ok());
        assert!(check_version_range(11, 0, 0).is_ok());
        assert!(matches!(
            check_version_range(10, 11, 0),
            Err(Error::UnsupportedVersion { found: 10, .. })
        ));
        assert!(matches!(
            check_version_range(17, 0, 16),
            Err(Error::UnsupportedVersion { found: 17, .. })
        ));
    }

    #[test]
    fn test_search_path_runtime_keeps_bare_name() {
        let runtime = JavaRuntime {
            home: None,
            major_version: 17,
        };
        assert!(runtime.is_search_path());
        assert_eq!(runtime.executable("java"), PathBuf::from("java"));
    }

    #[test]
    fn test_homed_runtime_joins_executable() {
        let runtime = JavaRuntime {
            home: Some(PathBuf::from("/opt/jdk/bin")),
            major_version: 17,
        };
        assert_eq!(
            runtime.executable("java"),
            PathBuf::from("/opt/jdk/bin/java")
        );
    }
}
