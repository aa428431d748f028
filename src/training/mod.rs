pub mod core;
pub mod errors;
pub mod loader;
pub mod report;
pub mod utils;
pub mod validate;

pub use self::core::{Issue, MetadataDocument, Schema, Subject};
pub use self::errors::{Error, Result};
pub use self::report::ValidationReport;
pub use self::validate::{ValidationRequest, run};
