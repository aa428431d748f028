//! Fatal errors that abort a validation run before any content check.
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::training::core::Subject;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid subject '{subject}'")]
    InvalidSubject { subject: String },

    #[error("Schema file not found for {subject} at {}", .path.display())]
    SchemaNotFound { subject: Subject, path: PathBuf },

    #[error("Invalid YAML in schema file {}: {source}", .path.display())]
    SchemaParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Schema file {} is empty", .path.display())]
    EmptySchema { path: PathBuf },

    #[error("Metadata file not found at {}", .path.display())]
    MetadataNotFound { path: PathBuf },

    #[error("Invalid YAML in metadata file: {source}")]
    MetadataParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Metadata file {} must contain a mapping at the top level", .path.display())]
    MetadataNotMapping { path: PathBuf },

    #[error("Metadata file {} is empty", .path.display())]
    EmptyMetadata { path: PathBuf },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Builder error: {0}")]
    Builder(String),
}

impl Error {
    pub fn metadata_not_found(path: &Path) -> Self {
        Self::MetadataNotFound {
            path: path.to_path_buf(),
        }
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
