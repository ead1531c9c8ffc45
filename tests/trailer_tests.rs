//! Tests for the executable trailer codec.
//!
//! Validates the end-of-file frame layout, round-trip fidelity regardless of
//! leading content size, and every decode rejection path.

use javelin::constants::{TRAILER_FRAME_LEN, TRAILER_MAGIC};
use javelin::{read_trailer, write_trailer, AppSpec, Error, LaunchManifest, RuntimeSpec};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample_manifest() -> LaunchManifest {
    LaunchManifest {
        tool_version: "0.3.0".to_string(),
        custom_wrapper: true,
        runtime: RuntimeSpec {
            minimum_version: 11,
            maximum_version: 17,
            initial_memory: 512 * 1024 * 1024,
            memory_limit: 2 * 1024 * 1024 * 1024,
            additional_arguments: "-ea -Xss1m".to_string(),
        },
        application: AppSpec {
            main_class: "com.example.Main".to_string(),
        },
    }
}

/// Writes `leading` bytes followed by a trailer for `manifest`, returning
/// the file path.
fn write_wrapped_file(dir: &TempDir, leading: &[u8], manifest: &LaunchManifest) -> PathBuf {
    let path = dir.path().join("wrapped");
    let mut file = File::create(&path).unwrap();
    file.write_all(leading).unwrap();
    write_trailer(&mut file, manifest).unwrap();
    path
}

// =============================================================================
// Round-Trip Tests
// =============================================================================

#[test]
fn test_round_trip_reproduces_every_field() {
    let dir = TempDir::new().unwrap();
    let manifest = sample_manifest();

    let path = write_wrapped_file(&dir, b"\x7fELF fake stub bytes", &manifest);
    let decoded = read_trailer(&path).unwrap();

    assert_eq!(decoded, manifest);
}

#[test]
fn test_round_trip_independent_of_leading_size() {
    let dir = TempDir::new().unwrap();
    let manifest = sample_manifest();

    // No leading content at all, and a payload-sized one.
    for leading in [Vec::new(), vec![0xAB; 256 * 1024]] {
        let path = write_wrapped_file(&dir, &leading, &manifest);
        assert_eq!(read_trailer(&path).unwrap(), manifest);
    }
}

#[test]
fn test_round_trip_zeroed_fields() {
    let dir = TempDir::new().unwrap();
    let manifest = LaunchManifest {
        tool_version: String::new(),
        custom_wrapper: false,
        runtime: RuntimeSpec::default(),
        application: AppSpec::default(),
    };

    let path = write_wrapped_file(&dir, b"stub", &manifest);
    assert_eq!(read_trailer(&path).unwrap(), manifest);
}

#[test]
fn test_write_reports_payload_length() {
    let mut buf = Vec::new();
    let payload_len = write_trailer(&mut buf, &sample_manifest()).unwrap();

    assert_eq!(buf.len(), payload_len + TRAILER_FRAME_LEN);
}

// =============================================================================
// Decode Rejection Tests
// =============================================================================

#[test]
fn test_empty_file_is_truncated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty");
    File::create(&path).unwrap();

    assert!(matches!(read_trailer(&path), Err(Error::TruncatedFile)));
}

#[test]
fn test_file_shorter_than_frame_is_truncated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short");
    std::fs::write(&path, b"abc").unwrap();

    assert!(matches!(read_trailer(&path), Err(Error::TruncatedFile)));
}

#[test]
fn test_unwrapped_file_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plain");
    std::fs::write(&path, b"just a plain executable with no trailer").unwrap();

    assert!(matches!(
        read_trailer(&path),
        Err(Error::NotAWrappedExecutable)
    ));
}

#[test]
fn test_wrong_magic_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("badmagic");

    let mut file = File::create(&path).unwrap();
    file.write_all(&[0u8; 32]).unwrap();
    file.write_all(&0xDEADBEEFu32.to_be_bytes()).unwrap();
    file.write_all(&8u16.to_be_bytes()).unwrap();
    drop(file);

    assert!(matches!(
        read_trailer(&path),
        Err(Error::NotAWrappedExecutable)
    ));
}

#[test]
fn test_length_beyond_file_is_truncated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("liar");

    // Valid magic, but the length field claims more payload than exists.
    let mut file = File::create(&path).unwrap();
    file.write_all(&[0u8; 16]).unwrap();
    file.write_all(&TRAILER_MAGIC.to_be_bytes()).unwrap();
    file.write_all(&4096u16.to_be_bytes()).unwrap();
    drop(file);

    assert!(matches!(read_trailer(&path), Err(Error::TruncatedFile)));
}

#[test]
fn test_garbage_payload_is_corrupt() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("garbage");

    let mut file = File::create(&path).unwrap();
    file.write_all(&[0xFF; 16]).unwrap();
    file.write_all(&TRAILER_MAGIC.to_be_bytes()).unwrap();
    file.write_all(&16u16.to_be_bytes()).unwrap();
    drop(file);

    assert!(matches!(
        read_trailer(&path),
        Err(Error::CorruptTrailer { .. })
    ));
}

// =============================================================================
// Encode Rejection Tests
// =============================================================================

#[test]
fn test_oversized_payload_rejected_before_writing() {
    let mut manifest = sample_manifest();
    manifest.runtime.additional_arguments = "x".repeat(70_000);

    let mut buf = Vec::new();
    let result = write_trailer(&mut buf, &manifest);

    assert!(matches!(result, Err(Error::WriteFailure { .. })));
    assert!(buf.is_empty(), "nothing may be written for an oversized payload");
}
