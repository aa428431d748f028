//! Pre-upload validation of training-data submissions.
//!
//! A submission is a `metadata.yaml` file plus the data files that sit next
//! to it. [`training::validate::run`] checks both against the schema of the
//! submission's subject area and returns a [`training::report::ValidationReport`].
pub mod training;
