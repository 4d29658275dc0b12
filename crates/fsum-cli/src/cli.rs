use anyhow::Result;
use clap::{Parser, Subcommand};
use fsum_core::config;

mod commands;

/// Top-level CLI for the fsum checksum tool.
#[derive(Debug, Parser)]
#[command(name = "fsum")]
#[command(about = "fsum: streaming MD5 checksums for local and remote files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Checksum a source and write the digest artifact.
    Run {
        /// Local path or HTTP(S) URL to checksum.
        source: String,

        /// Path of the digest artifact to write.
        output: String,

        /// Override the configured read chunk size in bytes.
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Override the configured progress interval, in megabytes read.
        #[arg(long)]
        progress_interval_mb: Option<u64>,
    },

    /// Compute and print the MD5 of a local file.
    Checksum {
        /// Path to the file.
        path: String,
    },
}

pub fn run_from_args() -> Result<()> {
    let cli = Cli::parse();

    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    match cli.command {
        CliCommand::Run {
            source,
            output,
            chunk_size,
            progress_interval_mb,
        } => {
            let mut cfg = cfg;
            if let Some(size) = chunk_size {
                cfg.chunk_size_bytes = size;
            }
            if let Some(mb) = progress_interval_mb {
                cfg.progress_interval_bytes = mb * 1024 * 1024;
            }
            cfg.validate()?;
            commands::run_task(&cfg, &source, &output)
        }
        CliCommand::Checksum { path } => commands::run_checksum(&path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_run_command() {
        let cli = Cli::try_parse_from(["fsum", "run", "/data/r1.fastq", "/tmp/md5sum.txt"])
            .unwrap();
        match cli.command {
            CliCommand::Run {
                source,
                output,
                chunk_size,
                progress_interval_mb,
            } => {
                assert_eq!(source, "/data/r1.fastq");
                assert_eq!(output, "/tmp/md5sum.txt");
                assert!(chunk_size.is_none());
                assert!(progress_interval_mb.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_run_with_overrides() {
        let cli = Cli::try_parse_from([
            "fsum",
            "run",
            "https://example.com/r1.fastq",
            "out.txt",
            "--chunk-size",
            "65536",
            "--progress-interval-mb",
            "100",
        ])
        .unwrap();
        match cli.command {
            CliCommand::Run {
                chunk_size,
                progress_interval_mb,
                ..
            } => {
                assert_eq!(chunk_size, Some(65536));
                assert_eq!(progress_interval_mb, Some(100));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parse_checksum_command() {
        let cli = Cli::try_parse_from(["fsum", "checksum", "sample.bam"]).unwrap();
        assert!(matches!(cli.command, CliCommand::Checksum { path } if path == "sample.bam"));
    }

    #[test]
    fn run_requires_both_positionals() {
        assert!(Cli::try_parse_from(["fsum", "run", "only-source"]).is_err());
    }
}
