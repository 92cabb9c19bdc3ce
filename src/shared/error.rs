use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a check that found problems
/// from a run that could not complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every requested operation or check passed
    Success = 0,
    /// A check ran and found violations (unformatted files, vet findings, NOTICE drift)
    CheckFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, external tool failure, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps an error to the exit code the CLI should report for it.
    pub fn for_error(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<BakeError>() {
            Some(BakeError::Drift { .. }) | Some(BakeError::ChecksFailed { .. }) => {
                ExitCode::CheckFailed
            }
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::CheckFailed => write!(f, "Check Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors.
///
/// Every variant carries the path or command that caused it so a failure can
/// be diagnosed from the message alone.
#[derive(Debug, Error)]
pub enum BakeError {
    #[error("Failed to walk search directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and is readable")]
    Scan { path: PathBuf, details: String },

    #[error("Failed to read license file: {path}\nDetails: {details}\n\n💡 Hint: Every vendored license must be readable, otherwise the NOTICE would be incomplete")]
    LicenseRead { path: PathBuf, details: String },

    #[error("Failed to render NOTICE document\nDetails: {details}")]
    Render { details: String },

    #[error("Failed to publish NOTICE file: {path}\nDetails: {details}{}", staged_hint(.staged))]
    Publish {
        path: PathBuf,
        staged: Option<PathBuf>,
        details: String,
    },

    #[error("NOTICE file needs to be updated: {path}\nReason: {reason}\n\n💡 Hint: Run `bake notice` and commit the result")]
    Drift { path: PathBuf, reason: String },

    #[error("{failed} of {total} check(s) failed")]
    ChecksFailed { failed: usize, total: usize },

    #[error("Git project root not found (searched upwards from {start})\n\n💡 Hint: Are you running bake from within a Git clone?")]
    ProjectRootNotFound { start: PathBuf },

    #[error("command failed (cmd=\"{command}\"): {details}")]
    CommandFailed { command: String, details: String },

    #[error("Failed to detect the project's golang version\n\n💡 Hint: Declare it as `:go-version:` in libbeat/docs/version.asciidoc or under `go:` in .travis.yml")]
    GoVersionNotFound,

    #[error("Failed to parse docker-compose config\nDetails: {details}")]
    ComposeConfig { details: String },

    #[error("Invalid config: {path}\nReason: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },
}

fn staged_hint(staged: &Option<PathBuf>) -> String {
    match staged {
        Some(path) => format!(
            "\nStaged copy kept at: {}\n\n💡 Hint: It is removed automatically by the next successful run",
            path.display()
        ),
        None => String::new(),
    }
}
