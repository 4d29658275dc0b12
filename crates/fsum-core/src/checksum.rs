//! Streaming MD5 digest over any byte source.
//!
//! Reads in fixed-size chunks and feeds an incremental hasher, so memory use
//! is bounded by the chunk size regardless of input length. The digest is a
//! pure function of the byte content; chunk boundaries never affect it.

use anyhow::{Context, Result};
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::{DEFAULT_CHUNK_SIZE, DEFAULT_PROGRESS_INTERVAL_BYTES};
use crate::error::DigestError;
use crate::progress::{NullProgress, ProgressSink};

/// Chunked incremental MD5 with periodic progress reporting.
pub struct StreamingDigester {
    chunk_size: usize,
    progress_interval_bytes: u64,
}

impl StreamingDigester {
    /// Both parameters must be positive (enforced upstream by config
    /// validation and CLI flag parsing).
    pub fn new(chunk_size: usize, progress_interval_bytes: u64) -> Self {
        Self {
            chunk_size,
            progress_interval_bytes,
        }
    }

    /// Consume `source` to end-of-stream and return the digest as lowercase
    /// hex. A cumulative byte count goes to `progress` each time another
    /// `progress_interval_bytes` have been read. On a read error the partial
    /// hash state is discarded.
    pub fn digest<R: Read>(
        &self,
        mut source: R,
        progress: &dyn ProgressSink,
    ) -> Result<String, DigestError> {
        let mut hasher = Md5::new();
        let mut buf = vec![0u8; self.chunk_size];
        let mut total: u64 = 0;
        let mut since_report: u64 = 0;
        loop {
            let n = source.read(&mut buf).map_err(DigestError::Io)?;
            if n == 0 {
                break;
            }
            hasher.update(&buf[..n]);
            total += n as u64;
            since_report += n as u64;
            if since_report >= self.progress_interval_bytes {
                progress.bytes_read(total);
                since_report = 0;
            }
        }
        Ok(hex::encode(hasher.finalize()))
    }
}

/// Compute the MD5 of a local file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded; suitable for large files.
pub fn md5_path(path: &Path) -> Result<String> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let digester = StreamingDigester::new(DEFAULT_CHUNK_SIZE, DEFAULT_PROGRESS_INTERVAL_BYTES);
    digester
        .digest(file, &NullProgress)
        .with_context(|| format!("read {}", path.display()))
}
