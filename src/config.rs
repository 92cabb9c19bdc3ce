//! Configuration file support for bake.
//!
//! Provides YAML-based configuration through `bake.config.yml` files at the
//! project root, including data structures, file loading, validation and the
//! merge of file values with command-line flags.
//!
//! Precedence is always: command-line flag, then config file, then the
//! built-in default. Paths in the config file are relative to the project root.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::application::dto::{CheckKind, DockerRequest, NoticeRequest};
use crate::compose::ComposeProject;
use crate::shared::error::BakeError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bake.config.yml";

pub const DEFAULT_BEAT: &str = "Elastic Beats";
pub const DEFAULT_COPYRIGHT: &str = "Elasticsearch BV";
pub const DEFAULT_START_YEAR: i32 = 2014;
pub const DEFAULT_NOTICE_FILE: &str = "NOTICE";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub notice: NoticeSection,
    #[serde(default)]
    pub docker: DockerSection,
    /// Checks run by a bare `bake check`
    pub checks: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `notice:` section
#[derive(Debug, Deserialize, Default)]
pub struct NoticeSection {
    pub beat: Option<String>,
    pub copyright: Option<String>,
    pub year: Option<i32>,
    pub output: Option<PathBuf>,
    pub dirs: Option<Vec<PathBuf>>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// `docker:` section
#[derive(Debug, Deserialize, Default)]
pub struct DockerSection {
    pub project: Option<String>,
    pub files: Option<Vec<PathBuf>>,
    pub log: Option<PathBuf>,
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values given on the `notice` command line
#[derive(Debug, Clone, Default)]
pub struct NoticeOverrides {
    pub beat: Option<String>,
    pub copyright: Option<String>,
    pub year: Option<i32>,
    pub output: Option<PathBuf>,
    pub dirs: Vec<PathBuf>,
}

/// Values given on the `docker` command line
#[derive(Debug, Clone, Default)]
pub struct DockerOverrides {
    pub project: Option<String>,
    pub files: Vec<PathBuf>,
    pub log: Option<PathBuf>,
    pub script: Option<PathBuf>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    tracing::debug!(config = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(path: &Path, reason: impl Into<String>) -> anyhow::Error {
    BakeError::InvalidConfig {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(beat) = &config.notice.beat {
        if beat.trim().is_empty() {
            return Err(invalid(path, "notice.beat must not be empty"));
        }
    }
    if let Some(year) = config.notice.year {
        if year <= 0 {
            return Err(invalid(
                path,
                format!("notice.year must be a positive year, got {}", year),
            ));
        }
    }
    if let Some(checks) = &config.checks {
        for (i, name) in checks.iter().enumerate() {
            CheckKind::from_str(name).map_err(|e| invalid(path, format!("checks[{}]: {}", i, e)))?;
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let sections = [
        ("", &config.unknown_fields),
        ("notice.", &config.notice.unknown_fields),
        ("docker.", &config.docker.unknown_fields),
    ];
    for (prefix, fields) in sections {
        for key in fields.keys() {
            eprintln!(
                "⚠️  Warning: Unknown config field '{}{}' will be ignored.",
                prefix, key
            );
        }
    }
}

impl ConfigFile {
    /// Merges `cli` over the file's `notice:` section and the defaults
    pub fn notice_request(&self, project_root: &Path, cli: NoticeOverrides) -> NoticeRequest {
        let section = &self.notice;

        let output = cli
            .output
            .or_else(|| section.output.as_ref().map(|p| project_root.join(p)))
            .unwrap_or_else(|| project_root.join(DEFAULT_NOTICE_FILE));

        let search_dirs = if !cli.dirs.is_empty() {
            cli.dirs
        } else {
            match &section.dirs {
                Some(dirs) if !dirs.is_empty() => {
                    dirs.iter().map(|d| project_root.join(d)).collect()
                }
                _ => vec![project_root.to_path_buf()],
            }
        };

        NoticeRequest::new(
            output,
            search_dirs,
            cli.beat
                .or_else(|| section.beat.clone())
                .unwrap_or_else(|| DEFAULT_BEAT.to_string()),
            cli.copyright
                .or_else(|| section.copyright.clone())
                .unwrap_or_else(|| DEFAULT_COPYRIGHT.to_string()),
            cli.year.or(section.year).unwrap_or(DEFAULT_START_YEAR),
        )
    }

    /// Merges `cli` over the file's `docker:` section
    pub fn docker_request(&self, project_root: &Path, cli: DockerOverrides) -> DockerRequest {
        let section = &self.docker;

        let files = if !cli.files.is_empty() {
            cli.files
        } else {
            section
                .files
                .iter()
                .flatten()
                .map(|f| project_root.join(f))
                .collect()
        };
        let log = cli
            .log
            .or_else(|| section.log.as_ref().map(|l| project_root.join(l)));

        DockerRequest::new(
            ComposeProject::new(cli.project.or_else(|| section.project.clone()), files),
            log,
            cli.script,
        )
    }

    /// Checks to run when none are named on the command line
    ///
    /// Names were validated on load, so unknown ones cannot appear here.
    pub fn default_checks(&self) -> Vec<CheckKind> {
        self.checks
            .iter()
            .flatten()
            .filter_map(|name| CheckKind::from_str(name).ok())
            .collect()
    }
}
