//! `fsum run <source> <output>` – run the checksum pipeline and write the artifact.

use anyhow::{bail, Context, Result};
use fsum_core::config::FsumConfig;
use fsum_core::pipeline::Pipeline;
use fsum_core::progress::LogProgress;
use fsum_core::reference::FileReference;
use std::path::Path;

pub fn run_task(cfg: &FsumConfig, source: &str, output: &str) -> Result<()> {
    let reference = FileReference::parse(source)?;
    if output.trim().is_empty() {
        bail!("output path must not be empty");
    }

    let pipeline = Pipeline::from_config(cfg);
    let result = pipeline
        .run_to_artifact(&reference, Path::new(output), &LogProgress)
        .with_context(|| format!("checksum of {} failed", source))?;

    println!("{}\t{}", result.hex_digest, result.source);
    tracing::info!("wrote digest artifact to {}", output);
    Ok(())
}
