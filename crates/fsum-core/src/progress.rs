//! Progress reporting for long checksum runs.
//!
//! The digester reports cumulative bytes read at a configured interval to an
//! injected sink. Progress is advisory telemetry only; it never influences
//! the computed digest.

/// Receives progress observations from the streaming digester.
pub trait ProgressSink {
    /// Called with the cumulative number of bytes read so far.
    fn bytes_read(&self, total_bytes: u64);
}

/// Logs `Read N.NN MB` lines via tracing (1 MB = 1048576 bytes).
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn bytes_read(&self, total_bytes: u64) {
        let mb = total_bytes as f64 / 1_048_576.0;
        tracing::info!("Read {:.2} MB", mb);
    }
}

/// Discards all observations. For callers that only want the digest.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn bytes_read(&self, _total_bytes: u64) {}
}
