//! Loading of the subject schema and the submitted metadata document
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::training::core::{MetadataDocument, Schema, Subject};
use crate::training::errors::{Error, Result};
use crate::training::utils::is_truthy;

/// Resolve the schema file of `subject` under `schema_root`.
pub fn schema_path(schema_root: &Path, subject: Subject) -> PathBuf {
    schema_root.join(subject.schema_file())
}

/// Load and parse the training schema for a subject
pub fn load_schema(schema_root: &Path, subject: Subject) -> Result<Schema> {
    let path = schema_path(schema_root, subject);
    if !path.exists() {
        return Err(Error::SchemaNotFound { subject, path });
    }
    debug!(path = %path.display(), %subject, "loading schema");

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
    let value: Value = serde_yaml::from_str(&content).map_err(|source| Error::SchemaParse {
        path: path.clone(),
        source,
    })?;
    if !is_truthy(&value) {
        return Err(Error::EmptySchema { path });
    }

    serde_yaml::from_value(value).map_err(|source| Error::SchemaParse { path, source })
}

/// Load a metadata file, distinguishing a missing file from unparsable YAML.
pub fn load_metadata(path: &Path) -> Result<MetadataDocument> {
    if !path.exists() {
        return Err(Error::metadata_not_found(path));
    }

    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let value: Value = serde_yaml::from_str(&content).map_err(|source| Error::MetadataParse {
        path: path.to_path_buf(),
        source,
    })?;
    if !is_truthy(&value) {
        return Err(Error::EmptyMetadata {
            path: path.to_path_buf(),
        });
    }

    match value {
        Value::Mapping(mapping) => {
            debug!(path = %path.display(), keys = mapping.len(), "metadata loaded");
            Ok(MetadataDocument::from(mapping))
        }
        _ => Err(Error::MetadataNotMapping {
            path: path.to_path_buf(),
        }),
    }
}
