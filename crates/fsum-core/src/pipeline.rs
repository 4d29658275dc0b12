//! Pipeline coordinator: wires the fetcher and digester together and
//! reconciles their outcomes.
//!
//! One invocation is `Idle → Fetching&Digesting → Reconciling → done`. Local
//! references are digested straight from the opened file; remote references
//! run the fetcher on a background thread writing into a bounded channel
//! while the digester drains the read end. No retries at this layer; a
//! failure in either stage terminates the invocation.

use std::fs::File;
use std::path::Path;
use std::thread;

use crate::artifact;
use crate::checksum::StreamingDigester;
use crate::config::FsumConfig;
use crate::error::{classify_io, PipelineError};
use crate::fetcher;
use crate::pipe;
use crate::progress::ProgressSink;
use crate::reference::FileReference;

/// A finished checksum: the digest and the identifier it was computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestResult {
    /// Lowercase hex MD5 of the source bytes.
    pub hex_digest: String,
    /// Original source identifier (path or URL), written verbatim to the artifact.
    pub source: String,
}

pub struct Pipeline {
    chunk_size: usize,
    progress_interval_bytes: u64,
    channel_depth: usize,
}

impl Pipeline {
    pub fn new(chunk_size: usize, progress_interval_bytes: u64, channel_depth: usize) -> Self {
        Self {
            chunk_size,
            progress_interval_bytes,
            channel_depth,
        }
    }

    pub fn from_config(cfg: &FsumConfig) -> Self {
        Self::new(
            cfg.chunk_size_bytes,
            cfg.progress_interval_bytes,
            cfg.channel_depth,
        )
    }

    /// Run one checksum invocation.
    ///
    /// If both stages fail (e.g. the fetch dies and the digester sees a broken
    /// pipe), the fetch error is returned as the cause and the digester's is
    /// logged at warn; the fetch stage is upstream, so its failure came first.
    pub fn run(
        &self,
        reference: &FileReference,
        progress: &dyn ProgressSink,
    ) -> Result<DigestResult, PipelineError> {
        let digester = StreamingDigester::new(self.chunk_size, self.progress_interval_bytes);
        let hex_digest = match reference {
            FileReference::Local(path) => {
                let file = File::open(path)
                    .map_err(|e| classify_io(e, &path.display().to_string()))?;
                digester.digest(file, progress)?
            }
            FileReference::Remote(_) => {
                let (writer, reader) = pipe::byte_channel(self.channel_depth);
                let fetch_ref = reference.clone();
                let fetch_handle = thread::spawn(move || fetcher::fetch(&fetch_ref, writer));
                let digest_result = digester.digest(reader, progress);
                let fetch_result = fetch_handle
                    .join()
                    .unwrap_or_else(|e| panic!("fetch thread panicked: {:?}", e));
                match (fetch_result, digest_result) {
                    (Ok(()), Ok(digest)) => digest,
                    (Ok(()), Err(digest_err)) => return Err(digest_err.into()),
                    (Err(fetch_err), Ok(_)) => return Err(fetch_err.into()),
                    (Err(fetch_err), Err(digest_err)) => {
                        tracing::warn!("digester also failed: {}", digest_err);
                        return Err(fetch_err.into());
                    }
                }
            }
        };
        Ok(DigestResult {
            hex_digest,
            source: reference.identifier(),
        })
    }

    /// The full task: run the pipeline and write the digest artifact to
    /// `output`, replacing any previous file there.
    pub fn run_to_artifact(
        &self,
        reference: &FileReference,
        output: &Path,
        progress: &dyn ProgressSink,
    ) -> Result<DigestResult, PipelineError> {
        let result = self.run(reference, progress)?;
        artifact::write(&result, output).map_err(PipelineError::Artifact)?;
        tracing::debug!(
            "wrote digest {} for {} to {}",
            result.hex_digest,
            result.source,
            output.display()
        );
        Ok(result)
    }
}
