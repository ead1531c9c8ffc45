//! Launch orchestration.
//!
//! Ties the trailer codec and the runtime locator together: recover the
//! manifest from the wrapper's own executable file, find a qualifying
//! runtime, build its argument vector and hand the terminal over to it.
//!
//! Every step is synchronous and blocking; the orchestrator spawns exactly
//! one child and waits for it. Failures before the child starts map to fixed
//! negative exit codes so that callers can tell an orchestration failure
//! from anything the application itself returns:
//!
//! | Code | Meaning                                  |
//! |------|------------------------------------------|
//! | -1   | own executable path could not be resolved |
//! | -2   | configuration trailer unreadable          |
//! | -3   | no compatible runtime located             |
//! | -4   | runtime executable missing on disk        |
//! | -5   | child could not be spawned or waited on   |

use crate::locator;
use crate::suffix::format_bytes;
use crate::trailer::{read_trailer, LaunchManifest};
use std::ffi::OsString;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::{debug, error};

/// The wrapper's own executable path could not be resolved.
pub const EXIT_SELF_LOOKUP_FAILURE: i32 = -1;
/// The configuration trailer could not be read.
pub const EXIT_CONFIG_FAILURE: i32 = -2;
/// No compatible runtime installation was located.
pub const EXIT_NO_RUNTIME: i32 = -3;
/// The located installation does not contain the launcher executable.
pub const EXIT_MISSING_EXECUTABLE: i32 = -4;
/// The runtime process could not be spawned or waited on.
pub const EXIT_SPAWN_FAILURE: i32 = -5;

/// Launches the application wrapped into the current executable.
///
/// Resolves the process's own path and delegates to [`launch`].
pub fn launch_current(runtime_executable: &str) -> i32 {
    let executable = match std::env::current_exe() {
        Ok(path) => path,
        Err(err) => {
            error!("failed to open application executable: {err}");
            return EXIT_SELF_LOOKUP_FAILURE;
        }
    };

    launch(&executable, runtime_executable)
}

/// Launches the application wrapped into `executable` under a located
/// runtime, blocking until it exits.
///
/// The child's exit code is propagated verbatim; orchestration failures
/// return the fixed negative codes documented on this module.
pub fn launch(executable: &Path, runtime_executable: &str) -> i32 {
    let manifest = match read_trailer(executable) {
        Ok(manifest) => manifest,
        Err(err) => {
            error!("failed to load application configuration: {err}");
            return EXIT_CONFIG_FAILURE;
        }
    };

    let runtime = match locator::locate_with(
        runtime_executable,
        manifest.runtime.minimum_version,
        manifest.runtime.maximum_version,
    ) {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("failed to locate a compatible runtime: {err}");
            return EXIT_NO_RUNTIME;
        }
    };

    // Search-path installations were already proven spawnable by the probe
    // itself and carry no home directory to check.
    let runtime_path = runtime.executable(runtime_executable);
    if !runtime.is_search_path() && !runtime_path.exists() {
        error!(
            "invalid runtime installation: cannot find executable {}",
            runtime_path.display()
        );
        return EXIT_MISSING_EXECUTABLE;
    }

    let arguments = build_arguments(&manifest, executable);
    debug!(
        "launching {} (v{}) with {} arguments",
        runtime_path.display(),
        runtime.major_version,
        arguments.len()
    );

    run_runtime(&runtime_path, &arguments)
}

/// Builds the runtime argument vector, in fixed order: heap flags, raw
/// additional arguments, the classpath pointing back at the wrapper file,
/// and the main class.
///
/// `additional_arguments` is split on single spaces with no quoting support;
/// consecutive spaces produce empty arguments. A known limitation of the
/// configuration schema, preserved for compatibility.
pub fn build_arguments(manifest: &LaunchManifest, executable: &Path) -> Vec<OsString> {
    let mut arguments = Vec::new();

    if manifest.runtime.initial_memory != 0 {
        arguments.push(format!("-Xms{}", format_bytes(manifest.runtime.initial_memory)).into());
    }
    if manifest.runtime.memory_limit != 0 {
        arguments.push(format!("-Xmx{}", format_bytes(manifest.runtime.memory_limit)).into());
    }

    if !manifest.runtime.additional_arguments.is_empty() {
        arguments.extend(
            manifest
                .runtime
                .additional_arguments
                .split(' ')
                .map(OsString::from),
        );
    }

    // The archive payload lives inside the wrapper file itself; the runtime
    // loads it directly from there.
    arguments.push("-cp".into());
    arguments.push(executable.as_os_str().to_os_string());
    arguments.push(manifest.application.main_class.clone().into());

    arguments
}

/// Spawns the runtime with all three standard streams inherited and blocks
/// until it exits.
///
/// Returns the child's exit code, or [`EXIT_SPAWN_FAILURE`] when the child
/// could not be started or was terminated without reporting one.
pub fn run_runtime(executable: &Path, arguments: &[OsString]) -> i32 {
    let status = Command::new(executable)
        .args(arguments)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status();

    match status {
        Ok(status) => status.code().unwrap_or(EXIT_SPAWN_FAILURE),
        Err(err) => {
            error!("failed to launch runtime process: {err}");
            EXIT_SPAWN_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trailer::{AppSpec, RuntimeSpec};

    fn manifest(runtime: RuntimeSpec) -> LaunchManifest {
        LaunchManifest {
            tool_version: "0.0.1".to_string(),
            custom_wrapper: false,
            runtime,
            application: AppSpec {
                main_class: "com.example.Main".to_string(),
            },
        }
    }

    #[test]
    fn test_heap_flags_omitted_when_unset() {
        let args = build_arguments(&manifest(RuntimeSpec::default()), Path::new("app"));
        assert_eq!(args, ["-cp", "app", "com.example.Main"].map(OsString::from));
    }

    #[test]
    fn test_double_space_produces_empty_argument() {
        let args = build_arguments(
            &manifest(RuntimeSpec {
                additional_arguments: "-ea  -Xss1m".to_string(),
                ..RuntimeSpec::default()
            }),
            Path::new("app"),
        );
        assert_eq!(
            args,
            ["-ea", "", "-Xss1m", "-cp", "app", "com.example.Main"].map(OsString::from)
        );
    }
}
