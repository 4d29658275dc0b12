use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Read buffer size used by the streaming digester.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;
/// Emit a progress line every 500 MB read.
pub const DEFAULT_PROGRESS_INTERVAL_BYTES: u64 = 500 * 1024 * 1024;
/// Chunks buffered between the fetch thread and the digester before the
/// fetcher blocks.
pub const DEFAULT_CHANNEL_DEPTH: usize = 64;

/// Global configuration loaded from `~/.config/fsum/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FsumConfig {
    /// Read buffer size in bytes for the streaming digester.
    #[serde(default = "default_chunk_size")]
    pub chunk_size_bytes: usize,
    /// Emit a progress observation every this many bytes read.
    #[serde(default = "default_progress_interval")]
    pub progress_interval_bytes: u64,
    /// Maximum in-flight chunks between the fetch and digest threads.
    #[serde(default = "default_channel_depth")]
    pub channel_depth: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

fn default_progress_interval() -> u64 {
    DEFAULT_PROGRESS_INTERVAL_BYTES
}

fn default_channel_depth() -> usize {
    DEFAULT_CHANNEL_DEPTH
}

impl Default for FsumConfig {
    fn default() -> Self {
        Self {
            chunk_size_bytes: DEFAULT_CHUNK_SIZE,
            progress_interval_bytes: DEFAULT_PROGRESS_INTERVAL_BYTES,
            channel_depth: DEFAULT_CHANNEL_DEPTH,
        }
    }
}

impl FsumConfig {
    /// All knobs must be positive; a zero chunk size or channel depth would
    /// stall the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size_bytes == 0 {
            bail!("chunk_size_bytes must be positive");
        }
        if self.progress_interval_bytes == 0 {
            bail!("progress_interval_bytes must be positive");
        }
        if self.channel_depth == 0 {
            bail!("channel_depth must be positive");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("fsum")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FsumConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FsumConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FsumConfig = toml::from_str(&data)?;
    cfg.validate()?;
    Ok(cfg)
}
