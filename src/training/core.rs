use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};
use std::{fmt, path::Path, str::FromStr};

use crate::training::errors::Error;

/// Top-level fields every metadata document must carry, in check order.
pub const REQUIRED_METADATA_FIELDS: [&str; 7] = [
    "dataset_name",
    "author",
    "creation_date",
    "description",
    "source",
    "license",
    "version",
];

/// Fields required inside the `provenance` section, in check order.
pub const REQUIRED_PROVENANCE_FIELDS: [&str; 4] = [
    "data_source",
    "collection_method",
    "validation_status",
    "last_updated",
];

/// Files next to the metadata that are never treated as data files.
pub const EXCLUDED_FILES: [&str; 4] = ["metadata.yaml", "README.md", "LICENSE", "CHANGELOG.md"];

pub const PROVENANCE_KEY: &str = "provenance";

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Chemistry,
    Mathematics,
    ComputerScience,
}

impl Subject {
    pub const ALL: [Subject; 3] = [
        Subject::Chemistry,
        Subject::Mathematics,
        Subject::ComputerScience,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chemistry => "chemistry",
            Self::Mathematics => "mathematics",
            Self::ComputerScience => "computer_science",
        }
    }

    /// Location of the subject's training schema, relative to the schema root.
    pub fn schema_file(&self) -> &'static Path {
        let path = match self {
            Self::Chemistry => "chemistry/schema/training_schema.yaml",
            Self::Mathematics => "mathematics/schema/training_schema.yaml",
            Self::ComputerScience => "computer_science/training_schema.yaml",
        };
        Path::new(path)
    }

    /// Comma-separated list of every valid subject identifier.
    pub fn names() -> String {
        Self::ALL
            .iter()
            .map(Subject::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Subject {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .ok_or_else(|| Error::InvalidSubject {
                subject: s.to_string(),
            })
    }
}

/// Per-subject training schema. Only the allowed file formats are consumed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(default)]
    pub file_formats: Option<Vec<String>>,
}

/// A parsed `metadata.yaml`, kept as a raw mapping so that absent and
/// mistyped fields can be reported rather than rejected by the parser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataDocument(Mapping);

impl MetadataDocument {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn has_provenance(&self) -> bool {
        self.contains(PROVENANCE_KEY)
    }

    /// The `provenance` section as a mapping. A section that is present but
    /// not a mapping has no fields.
    pub fn provenance(&self) -> Option<&Mapping> {
        self.get(PROVENANCE_KEY).and_then(Value::as_mapping)
    }

    pub fn provenance_field(&self, field: &str) -> Option<&Value> {
        self.provenance().and_then(|section| section.get(field))
    }
}

impl From<Mapping> for MetadataDocument {
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}

/// A non-fatal finding, collected and reported at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Issue {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Field '{field}' is empty")]
    EmptyField { field: String },

    #[error("Missing required 'provenance' section")]
    MissingProvenance,

    #[error("Missing required provenance field: {field}")]
    MissingProvenanceField { field: String },

    #[error("Provenance field '{field}' is empty")]
    EmptyProvenanceField { field: String },

    #[error("Invalid date format for '{field}': {value}. Expected format: YYYY-MM-DD")]
    InvalidDate { field: String, value: String },

    #[error(
        "File '{file}' has unsupported format '.{extension}'. Allowed formats: {}",
        .allowed.join(", ")
    )]
    UnsupportedFormat {
        file: String,
        extension: String,
        allowed: Vec<String>,
    },
}
