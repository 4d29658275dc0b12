//! Checksum command: compute MD5 of a local file.

use anyhow::Result;
use fsum_core::checksum;
use std::path::Path;

/// Compute and print the MD5 of the given file.
pub fn run_checksum(path: &str) -> Result<()> {
    let digest = checksum::md5_path(Path::new(path))?;
    println!("{}  {}", digest, path);
    Ok(())
}
