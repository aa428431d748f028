use clap::{Parser, error::ErrorKind};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use training_validator::training::{
    Error, Subject, ValidationRequest, report::write_header, run,
};

/// Validate training files and metadata before upload.
///
/// Checks that the metadata file carries every required field, that its
/// dates are YYYY-MM-DD and that the data files next to it use a format
/// allowed by the subject's training schema.
#[derive(Parser, Debug)]
#[command(name = "validate-training-files", version, about)]
struct Cli {
    /// One of chemistry, mathematics, computer_science
    subject: String,

    /// Path to the metadata.yaml file for the training data
    metadata: PathBuf,

    /// Directory the subject schema paths are resolved against
    #[arg(long, env = "TRAINING_SCHEMA_ROOT", default_value = ".")]
    schema_root: PathBuf,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            eprintln!("Valid subjects: {}", Subject::names());
            return ExitCode::FAILURE;
        }
    };

    match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> anyhow::Result<ExitCode> {
    let json = cli.json;
    let request = ValidationRequest::builder()
        .subject(cli.subject)
        .metadata_path(cli.metadata)
        .schema_root(cli.schema_root)
        .build()
        .map_err(|e| Error::Builder(e.to_string()))?;

    let mut stdout = std::io::stdout().lock();
    if !json {
        write_header(&mut stdout, &request.subject, &request.metadata_path)?;
    }

    let report = match run(&request) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("Error: {err}");
            if matches!(err, Error::InvalidSubject { .. }) {
                eprintln!("Valid subjects: {}", Subject::names());
            }
            return Ok(ExitCode::FAILURE);
        }
    };

    if json {
        writeln!(stdout, "{}", report.to_json()?)?;
    } else {
        report.write_text(&mut stdout)?;
    }

    Ok(if report.passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
