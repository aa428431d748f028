//! Validation of a training submission against its subject schema
use chrono::NaiveDate;
use derive_builder::Builder;
use path_clean::PathClean;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::training::core::{
    DATE_FORMAT, EXCLUDED_FILES, Issue, MetadataDocument, REQUIRED_METADATA_FIELDS,
    REQUIRED_PROVENANCE_FIELDS, Schema, Subject,
};
use crate::training::errors::{Error, Result};
use crate::training::loader::{load_metadata, load_schema};
use crate::training::report::ValidationReport;
use crate::training::utils::{display_value, extension_of, is_blank, is_truthy};

/// Inputs of a single validation run.
#[derive(Debug, Clone, PartialEq, Builder)]
#[builder(setter(into))]
pub struct ValidationRequest {
    pub subject: String,
    pub metadata_path: PathBuf,
    /// Directory the per-subject schema paths are resolved against.
    #[builder(default = "PathBuf::from(\".\")")]
    pub schema_root: PathBuf,
}

impl ValidationRequest {
    pub fn builder() -> ValidationRequestBuilder {
        ValidationRequestBuilder::default()
    }
}

/// Validate a submission.
///
/// Load failures (unknown subject, missing schema, missing or unparsable
/// metadata) are returned as errors and stop the run. Once both documents are
/// loaded every content check runs and its findings land in the report.
pub fn run(request: &ValidationRequest) -> Result<ValidationReport> {
    let subject: Subject = request.subject.parse()?;
    let schema = load_schema(&request.schema_root, subject)?;
    let metadata = load_metadata(&request.metadata_path)?;
    info!(path = %request.metadata_path.display(), "metadata file is valid YAML");

    let field_issues = check_required_fields(&metadata);
    let date_issues = validate_dates(&metadata);
    let format_issues = validate_file_formats(&request.metadata_path, &schema)?;
    info!(
        fields = field_issues.len(),
        dates = date_issues.len(),
        formats = format_issues.len(),
        "content checks complete"
    );

    Ok(ValidationReport {
        subject,
        metadata_path: request.metadata_path.clone(),
        field_issues,
        date_issues,
        format_issues,
    })
}

/// Check that every required top-level and provenance field is present and non-empty.
pub fn check_required_fields(metadata: &MetadataDocument) -> Vec<Issue> {
    let mut issues = Vec::new();

    for field in REQUIRED_METADATA_FIELDS {
        match metadata.get(field) {
            None => issues.push(Issue::MissingField {
                field: field.to_string(),
            }),
            Some(value) if is_blank(value) => issues.push(Issue::EmptyField {
                field: field.to_string(),
            }),
            Some(_) => {}
        }
    }

    if !metadata.has_provenance() {
        issues.push(Issue::MissingProvenance);
        return issues;
    }

    for field in REQUIRED_PROVENANCE_FIELDS {
        match metadata.provenance_field(field) {
            None => issues.push(Issue::MissingProvenanceField {
                field: field.to_string(),
            }),
            Some(value) if is_blank(value) => issues.push(Issue::EmptyProvenanceField {
                field: field.to_string(),
            }),
            Some(_) => {}
        }
    }

    issues
}

/// Check `creation_date` and, when a provenance section exists, its
/// `last_updated`. Unset dates are left to [`check_required_fields`].
pub fn validate_dates(metadata: &MetadataDocument) -> Vec<Issue> {
    let mut dates = vec![("creation_date", metadata.get("creation_date"))];
    if metadata.has_provenance() {
        dates.push(("last_updated", metadata.provenance_field("last_updated")));
    }

    dates
        .into_iter()
        .filter_map(|(field, value)| {
            let value = display_value(value.filter(|v| is_truthy(v))?);
            if parse_date(&value).is_some() {
                return None;
            }
            debug!(field, %value, "rejected date");
            Some(Issue::InvalidDate {
                field: field.to_string(),
                value,
            })
        })
        .collect()
}

/// Parse a `YYYY-MM-DD` date: a four-digit year, one- or two-digit month and
/// day, no signs or whitespace, and a real calendar day.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = value.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return None;
    };
    let digits = |s: &str, min: usize, max: usize| {
        (min..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
    };
    if !digits(*year, 4, 4) || !digits(*month, 1, 2) || !digits(*day, 1, 2) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Directory holding the submission's data files.
pub fn submission_dir(metadata_path: &Path) -> PathBuf {
    match metadata_path.clean().parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Check the extension of every data file next to the metadata file
/// against the schema's allowed formats.
pub fn validate_file_formats(metadata_path: &Path, schema: &Schema) -> Result<Vec<Issue>> {
    let Some(allowed) = &schema.file_formats else {
        debug!("schema lists no file formats, skipping format check");
        return Ok(Vec::new());
    };

    let dir = submission_dir(metadata_path);
    let mut data_files = Vec::new();
    for entry in std::fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))? {
        let entry = entry.map_err(|e| Error::io(&dir, e))?;
        if !entry.path().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if EXCLUDED_FILES.contains(&name.as_str()) || name.starts_with('.') {
            continue;
        }
        data_files.push(name);
    }
    data_files.sort();
    debug!(dir = %dir.display(), count = data_files.len(), "data files found");

    Ok(data_files
        .into_iter()
        .filter_map(|file| {
            let extension = extension_of(&file);
            (!allowed.contains(&extension)).then(|| Issue::UnsupportedFormat {
                file,
                extension,
                allowed: allowed.clone(),
            })
        })
        .collect())
}
