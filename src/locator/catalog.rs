//! Installation catalog discovery.
//!
//! Windows maintains a registry of JDK installations under
//! `HKLM\SOFTWARE\JavaSoft\JDK`: a `CurrentVersion` value naming the newest
//! installed major version, plus one subkey per version whose `JavaHome`
//! value points at the installation root. This strategy reads that catalog
//! and resolves the root's `bin` directory.
//!
//! No other platform maintains a comparable catalog, so non-Windows builds
//! compile a stub that always reports [`Error::NotFound`], which preserves
//! the locator's fall-through to search-path probing uniformly.
//!
//! [`Error::NotFound`]: crate::error::Error::NotFound

// =============================================================================
// Windows Implementation
// =============================================================================

#[cfg(target_os = "windows")]
mod windows {
    use crate::error::{Error, Result};
    use crate::locator::{check_version_range, JavaRuntime};
    use std::io;
    use std::path::PathBuf;
    use tracing::debug;
    use winreg::enums::HKEY_LOCAL_MACHINE;
    use winreg::RegKey;

    const ROOT_KEY: &str = "SOFTWARE\\JavaSoft\\JDK";
    const CURRENT_VERSION_VALUE: &str = "CurrentVersion";
    const JAVA_HOME_VALUE: &str = "JavaHome";

    /// Resolves the newest catalogued installation, validated against the
    /// requested version range.
    pub fn find(minimum_version: u64, maximum_version: u64) -> Result<JavaRuntime> {
        let latest = latest_version()?;
        check_version_range(latest, minimum_version, maximum_version)?;

        let root = root_for_version(latest)?;
        debug!("registry catalog lists runtime v{latest} at {}", root.display());

        Ok(JavaRuntime {
            home: Some(root.join("bin")),
            major_version: latest,
        })
    }

    /// Newest installed major version as indicated by the registry.
    fn latest_version() -> Result<u64> {
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        let root = hklm.open_subkey(ROOT_KEY).map_err(missing_as_not_found)?;

        let latest: String = root
            .get_value(CURRENT_VERSION_VALUE)
            .map_err(missing_as_not_found)?;

        latest.parse().map_err(|_| Error::InvalidInstallation {
            reason: format!("illegal runtime version {latest:?} in catalog"),
        })
    }

    /// Installation root registered for a given major version.
    fn root_for_version(version: u64) -> Result<PathBuf> {
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        let key = hklm
            .open_subkey(format!("{ROOT_KEY}\\{version}"))
            .map_err(missing_as_not_found)?;

        let home: String = key.get_value(JAVA_HOME_VALUE).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                Error::InvalidInstallation {
                    reason: format!("catalog entry for v{version} is missing {JAVA_HOME_VALUE}"),
                }
            } else {
                Error::Io(e)
            }
        })?;

        Ok(PathBuf::from(home))
    }

    fn missing_as_not_found(err: io::Error) -> Error {
        if err.kind() == io::ErrorKind::NotFound {
            Error::NotFound
        } else {
            Error::Io(err)
        }
    }
}

// =============================================================================
// Non-Windows Stub
// =============================================================================

#[cfg(not(target_os = "windows"))]
mod stub {
    use crate::error::{Error, Result};
    use crate::locator::JavaRuntime;

    /// No installation catalog exists on this platform; the locator falls
    /// through to search-path probing.
    pub fn find(_minimum_version: u64, _maximum_version: u64) -> Result<JavaRuntime> {
        Err(Error::NotFound)
    }
}

// =============================================================================
// Re-exports
// =============================================================================

#[cfg(target_os = "windows")]
pub use self::windows::find;

#[cfg(not(target_os = "windows"))]
pub use self::stub::find;
