use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::application::dto::CheckKind;

/// Check names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CheckArg {
    /// gofmt -s reports no unformatted files
    Fmt,
    /// go vet reports no problems
    Vet,
    /// The NOTICE file is up to date
    Notice,
}

impl From<CheckArg> for CheckKind {
    fn from(arg: CheckArg) -> Self {
        match arg {
            CheckArg::Fmt => CheckKind::Fmt,
            CheckArg::Vet => CheckKind::Vet,
            CheckArg::Notice => CheckKind::Notice,
        }
    }
}

/// Build automation for Beats projects
#[derive(Parser, Debug)]
#[command(name = "bake")]
#[command(version)]
#[command(about = "Build automation for Beats projects", long_about = None)]
pub struct Args {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Path to a config file (defaults to bake.config.yml at the project root)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the NOTICE file from the licenses of vendored dependencies
    Notice {
        /// Beat name printed in the NOTICE header [default: Elastic Beats]
        #[arg(short, long)]
        beat: Option<String>,

        /// Copyright holder [default: Elasticsearch BV]
        #[arg(short, long)]
        copyright: Option<String>,

        /// First copyright year [default: 2014]
        #[arg(short, long)]
        year: Option<i32>,

        /// Output file [default: NOTICE at the project root]
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Directories searched for vendored licenses [default: project root]
        #[arg(value_name = "DIRS", value_parser = existing_dir)]
        dirs: Vec<PathBuf>,
    },

    /// Run checks on the project. By default all checks are run.
    Check {
        /// Checks to run
        #[arg(value_enum, value_name = "CHECKS")]
        checks: Vec<CheckArg>,
    },

    /// Run gofmt -s on non-vendor Go files
    Fmt,

    /// Start test services powered by Docker and open a shell whose
    /// environment variables point to the services
    Docker {
        /// Alternate project name (default: directory name)
        #[arg(short, long)]
        project: Option<String>,

        /// Alternate compose file (default: docker-compose.yml)
        #[arg(short, long = "file", value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Log output file for the services
        #[arg(short = 'o', long, value_name = "FILE")]
        log: Option<PathBuf>,

        /// Script to run instead of an interactive shell
        #[arg(value_name = "SCRIPT")]
        script: Option<PathBuf>,
    },

    /// Print the Go version used by the project
    Info {
        /// Print the Go version used by the project
        #[arg(long)]
        go_version: bool,
    },

    /// Go version management
    Gvm {
        /// Use the project's Go version
        #[arg(long)]
        project_go: bool,

        /// Output PowerShell commands (Windows only)
        #[arg(long)]
        powershell: bool,

        /// Go version
        #[arg(value_name = "VERSION")]
        version: Option<String>,
    },
}

/// Accepts only paths that name an existing directory
fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("'{}' is not an existing directory", value))
    }
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
