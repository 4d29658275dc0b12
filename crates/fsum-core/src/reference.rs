//! File reference modeling: local path or remote HTTP(S) object.
//!
//! Caller input is a single string; anything that parses as an absolute URL
//! is remote, anything else is a local path. Non-HTTP(S) schemes are rejected
//! so a typo fails loudly instead of being hashed as a local path.

use std::path::PathBuf;
use url::Url;

use crate::error::PipelineError;

/// Identifies the file to checksum. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileReference {
    Local(PathBuf),
    Remote(Url),
}

impl FileReference {
    /// Parse and validate a caller-supplied reference string.
    pub fn parse(raw: &str) -> Result<Self, PipelineError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(PipelineError::InvalidReference(
                "empty file reference".to_string(),
            ));
        }
        match Url::parse(trimmed) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                Ok(FileReference::Remote(url))
            }
            Ok(url) => Err(PipelineError::InvalidReference(format!(
                "unsupported scheme '{}' in {}",
                url.scheme(),
                trimmed
            ))),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Ok(FileReference::Local(PathBuf::from(trimmed)))
            }
            Err(e) => Err(PipelineError::InvalidReference(format!(
                "{}: {}",
                trimmed, e
            ))),
        }
    }

    /// The original textual form, as written into the digest artifact.
    pub fn identifier(&self) -> String {
        match self {
            FileReference::Local(path) => path.display().to_string(),
            FileReference::Remote(url) => url.as_str().to_string(),
        }
    }
}
