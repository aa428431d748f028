//! Rendering of validation results for the console
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::training::core::{Issue, Subject};

const RULE_WIDTH: usize = 60;

/// Outcome of a run in which both the schema and the metadata loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub subject: Subject,
    pub metadata_path: PathBuf,
    pub field_issues: Vec<Issue>,
    pub date_issues: Vec<Issue>,
    pub format_issues: Vec<Issue>,
}

#[derive(Serialize)]
struct Summary<'a> {
    subject: Subject,
    metadata_path: &'a Path,
    passed: bool,
    errors: Vec<String>,
}

impl ValidationReport {
    /// All issues in check order: fields, then dates, then file formats.
    pub fn issues(&self) -> impl Iterator<Item = &Issue> {
        self.field_issues
            .iter()
            .chain(&self.date_issues)
            .chain(&self.format_issues)
    }

    pub fn passed(&self) -> bool {
        self.issues().next().is_none()
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Metadata file is valid YAML")?;
        if self.field_issues.is_empty() {
            writeln!(out, "All required metadata fields present")?;
        }
        if self.date_issues.is_empty() {
            writeln!(out, "Date fields properly formatted")?;
        }
        if self.format_issues.is_empty() {
            writeln!(out, "File formats are supported")?;
        }

        let rule = "=".repeat(RULE_WIDTH);
        writeln!(out, "\n{rule}")?;
        if self.passed() {
            writeln!(out, "VALIDATION PASSED")?;
            writeln!(out, "\nYour training files are ready to upload!")?;
            writeln!(out, "Next steps:")?;
            writeln!(out, "  1. Commit your changes")?;
            writeln!(out, "  2. Push to your fork")?;
            writeln!(out, "  3. Create a pull request")?;
        } else {
            writeln!(out, "VALIDATION FAILED\n")?;
            writeln!(out, "Errors found:")?;
            for (i, issue) in self.issues().enumerate() {
                writeln!(out, "  {}. {issue}", i + 1)?;
            }
            writeln!(out, "\nPlease fix these errors before uploading.")?;
        }
        writeln!(out, "{rule}")
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Summary {
            subject: self.subject,
            metadata_path: &self.metadata_path,
            passed: self.passed(),
            errors: self.issues().map(ToString::to_string).collect(),
        })
    }
}

/// Banner printed before a run starts.
pub fn write_header<W: Write>(out: &mut W, subject: &str, metadata_path: &Path) -> io::Result<()> {
    writeln!(out, "\nValidating training files for {subject}...")?;
    writeln!(out, "Metadata file: {}\n", metadata_path.display())
}
