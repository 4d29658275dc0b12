//! Integration test: checksum a remote object served by a local HTTP server.
//!
//! Starts a minimal server, runs the full pipeline against its URL, and
//! asserts the artifact content and error behavior.

mod common;

use fsum_core::error::{FetchError, PipelineError};
use fsum_core::pipeline::Pipeline;
use fsum_core::progress::NullProgress;
use fsum_core::reference::FileReference;
use tempfile::tempdir;

fn test_pipeline() -> Pipeline {
    Pipeline::new(4096, u64::MAX, 4)
}

#[test]
fn remote_checksum_writes_expected_artifact() {
    let url = common::http_server::start(b"abc".to_vec());
    let dir = tempdir().unwrap();
    let output = dir.path().join("md5sum.txt");

    let reference = FileReference::parse(&url).unwrap();
    let result = test_pipeline()
        .run_to_artifact(&reference, &output, &NullProgress)
        .expect("remote checksum");

    assert_eq!(result.hex_digest, "900150983cd24fb0d6963f7d28e17f72");
    let content = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        format!("900150983cd24fb0d6963f7d28e17f72\t{}\n", url)
    );
}

#[test]
fn remote_digest_matches_local_for_same_content() {
    let body: Vec<u8> = (0u8..100).cycle().take(256 * 1024).collect();
    let url = common::http_server::start(body.clone());
    let dir = tempdir().unwrap();
    let local_path = dir.path().join("copy.bin");
    std::fs::write(&local_path, &body).unwrap();

    let pipeline = test_pipeline();
    let remote = pipeline
        .run(&FileReference::parse(&url).unwrap(), &NullProgress)
        .expect("remote digest");
    let local = pipeline
        .run(&FileReference::Local(local_path), &NullProgress)
        .expect("local digest");

    assert_eq!(remote.hex_digest, local.hex_digest);
}

#[test]
fn remote_not_found_fails_and_does_not_hang() {
    let url = common::http_server::start_with_status(404, b"not here\n".to_vec());
    let err = test_pipeline()
        .run(&FileReference::parse(&url).unwrap(), &NullProgress)
        .unwrap_err();
    assert!(matches!(err, PipelineError::Fetch(FetchError::NotFound(_))));
}

#[test]
fn remote_forbidden_is_permission_denied() {
    let url = common::http_server::start_with_status(403, b"no\n".to_vec());
    let err = test_pipeline()
        .run(&FileReference::parse(&url).unwrap(), &NullProgress)
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Fetch(FetchError::PermissionDenied(_))
    ));
}

#[test]
fn small_channel_depth_still_completes() {
    let body: Vec<u8> = (0u8..=255).cycle().take(512 * 1024).collect();
    let url = common::http_server::start(body.clone());

    let pipeline = Pipeline::new(1024, u64::MAX, 1);
    let result = pipeline
        .run(&FileReference::parse(&url).unwrap(), &NullProgress)
        .expect("bounded channel digest");

    let unbounded = test_pipeline()
        .run(&FileReference::parse(&url).unwrap(), &NullProgress)
        .unwrap();
    assert_eq!(result.hex_digest, unbounded.hex_digest);
}
