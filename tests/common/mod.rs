#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const VALID_METADATA: &str = r#"dataset_name: Sorting traces
author: Ada Lovelace
creation_date: "2024-01-01"
description: Step-by-step traces of classic sorting algorithms
source: Generated
license: MIT
version: "1.0"
provenance:
  data_source: Simulator
  collection_method: Scripted generation
  validation_status: verified
  last_updated: "2024-01-02"
"#;

/// A schema root with every subject schema allowing `formats`, plus a
/// submission directory holding `metadata.yaml` and the given data files.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(formats: &[&str]) -> Self {
        let dir = TempDir::new().unwrap();
        let schema = format!("file_formats: [{}]\n", formats.join(", "));
        for rel in [
            "chemistry/schema/training_schema.yaml",
            "mathematics/schema/training_schema.yaml",
            "computer_science/training_schema.yaml",
        ] {
            let path = dir.path().join(rel);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, &schema).unwrap();
        }
        fs::create_dir_all(dir.path().join("submission")).unwrap();
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.root().join("submission").join("metadata.yaml")
    }

    pub fn write_metadata(&self, content: &str) -> PathBuf {
        let path = self.metadata_path();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn add_file(&self, name: &str) {
        fs::write(self.root().join("submission").join(name), "").unwrap();
    }
}
