//! Bucket policy documents
//!
//! A policy is sent to the service exactly as it was written. The text is
//! parsed only to reject documents that are not a JSON object.

use std::path::Path;

use crate::error::{Error, Result};

/// Raw policy text that is known to be a well-formed JSON object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyDocument {
    raw: String,
}

impl PolicyDocument {
    /// Validate policy text
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(&raw)
            .map_err(|e| Error::InvalidPolicy(e.to_string()))?;
        Ok(Self { raw })
    }

    /// Read and validate a policy file
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::PolicyFileNotFound(path.to_path_buf())
            } else {
                Error::Io(e)
            }
        })?;
        Self::parse(raw)
    }

    /// The policy text, byte for byte as read
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}
