//! Error taxonomy for the checksum pipeline, plus classification helpers
//! that map underlying I/O and HTTP failures into it.

use std::io;
use thiserror::Error;

/// Error from the fetch stage (reading the source and writing it into the sink).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Source file or object does not exist (missing path, HTTP 404/410).
    #[error("source not found: {0}")]
    NotFound(String),
    /// Access to the source was denied (EACCES, HTTP 401/403).
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    /// Transport-level failure: network, disk, or a closed reader side.
    #[error("transfer failed: {0}")]
    Io(#[source] io::Error),
}

/// Error from the digest stage. The accumulator's partial state is discarded;
/// no partial digest is ever returned.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("read from byte source failed: {0}")]
    Io(#[source] io::Error),
}

/// Consolidated error surfaced by one pipeline invocation.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Malformed or empty file reference supplied by the caller.
    #[error("invalid file reference: {0}")]
    InvalidReference(String),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Digest(#[from] DigestError),
    /// Writing the digest artifact failed.
    #[error("writing digest artifact failed: {0}")]
    Artifact(#[source] io::Error),
}

/// Classify an I/O error from opening or reading a source into a `FetchError`.
/// `source` is the identifier used in the message (path or URL).
pub(crate) fn classify_io(err: io::Error, source: &str) -> FetchError {
    match err.kind() {
        io::ErrorKind::NotFound => FetchError::NotFound(source.to_string()),
        io::ErrorKind::PermissionDenied => FetchError::PermissionDenied(source.to_string()),
        _ => FetchError::Io(err),
    }
}

/// Classify an HTTP status reported by the remote store into a `FetchError`.
pub(crate) fn classify_http_status(code: u32, source: &str) -> FetchError {
    match code {
        404 | 410 => FetchError::NotFound(source.to_string()),
        401 | 403 => FetchError::PermissionDenied(source.to_string()),
        _ => FetchError::Io(io::Error::new(
            io::ErrorKind::Other,
            format!("HTTP {} from {}", code, source),
        )),
    }
}

/// Wrap a curl error as a transport failure.
pub(crate) fn curl_io(err: curl::Error) -> FetchError {
    FetchError::Io(io::Error::new(io::ErrorKind::Other, err))
}
