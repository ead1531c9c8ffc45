//! # javelin
//!
//! **Self-Contained Native Launchers for Java Application Archives**
//!
//! This crate wraps a packaged Java application archive into a native
//! executable that locates a compatible runtime on the host machine at
//! startup and launches the archive under it, forwarding the configuration
//! (heap sizes, extra flags, entry point) baked in at packaging time.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                            javelin                                │
//! ├───────────────────────────────────────────────────────────────────┤
//! │  wrap time                                                        │
//! │  ┌──────────────┐    ┌───────────────────────────────────────┐    │
//! │  │ StubCatalog  │──► │ stub │ archive │ config │ magic │ len │    │
//! │  └──────────────┘    └───────────────────────────────────────┘    │
//! │                                   ▲                               │
//! │                            trailer codec                          │
//! │                                   ▼                               │
//! │  launch time                                                      │
//! │  ┌─────────────────┐   ┌──────────────────┐   ┌───────────────┐   │
//! │  │  read own file  │──►│  locate runtime  │──►│ spawn + wait  │   │
//! │  └─────────────────┘   └──────────────────┘   └───────────────┘   │
//! │                          catalog │ search path                    │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Trailer Format
//!
//! The configuration travels in a trailer at the absolute end of the wrapped
//! file: a bincode payload followed by a big-endian u32 magic and a
//! big-endian u16 payload length. Reading seeks backward from EOF, so the
//! trailer is recoverable no matter how large the stub binary or the archive
//! in front of it are. See [`trailer`].
//!
//! # Runtime Discovery
//!
//! [`locator::locate`] tries the platform installation catalog first (the
//! Windows registry; an always-`NotFound` stub elsewhere) and falls back to
//! probing the conventional launcher name on the search path. The fallback
//! triggers only when the catalog has no entry at all — a catalogued
//! installation with the wrong version or a broken record fails the launch
//! instead of being silently papered over.
//!
//! # Concurrency Model
//!
//! Everything here is single-threaded, synchronous and blocking: trailer I/O
//! is a sequence of seeks and reads on one scoped file handle, probing spawns
//! one child and waits for it, and the final launch spawns exactly one child
//! and blocks until it exits.
//!
//! # Example
//!
//! ```rust,ignore
//! use javelin::{LaunchManifest, RuntimeSpec, AppSpec, StubCatalog};
//!
//! fn main() -> javelin::Result<()> {
//!     let mut catalog = StubCatalog::new();
//!     catalog.insert("linux-amd64", std::fs::read("stubs/linux-amd64")?);
//!
//!     let manifest = LaunchManifest {
//!         tool_version: javelin::wrap::tool_version().to_string(),
//!         custom_wrapper: false,
//!         runtime: RuntimeSpec {
//!             minimum_version: 17,
//!             memory_limit: 2 * 1024 * 1024 * 1024,
//!             ..RuntimeSpec::default()
//!         },
//!         application: AppSpec { main_class: "com.example.Main".into() },
//!     };
//!
//!     let archive = std::fs::read("app.jar")?;
//!     javelin::wrap_file(
//!         "app".as_ref(),
//!         catalog.get("linux-amd64")?,
//!         &archive,
//!         &manifest,
//!     )?;
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod error;
pub mod launch;
pub mod locator;
pub mod suffix;
pub mod trailer;
pub mod wrap;

// Re-exports
pub use error::{Error, Result};
pub use launch::{launch, launch_current};
pub use locator::{locate, JavaRuntime};
pub use suffix::{format_bytes, parse_bytes};
pub use trailer::{read_trailer, write_trailer, AppSpec, LaunchManifest, RuntimeSpec};
pub use wrap::{render_info, wrap_file, write_wrapped, StubCatalog};
