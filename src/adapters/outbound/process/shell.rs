use crate::ports::outbound::ShellRunner;
use crate::shared::error::BakeError;
use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::Command;

const DEFAULT_SHELL: &str = "/bin/bash";

/// BashShell adapter that runs bash attached to the caller's terminal
pub struct BashShell {
    program: PathBuf,
}

impl BashShell {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_SHELL)
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for BashShell {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellRunner for BashShell {
    fn run_shell(&self, script: Option<&Path>, env: &BTreeMap<String, String>) -> Result<()> {
        let mut command = Command::new(&self.program);
        if let Some(script) = script {
            command.arg(script);
        }
        command.envs(env);

        let command_line = match script {
            Some(script) => format!("{} {}", self.program.display(), script.display()),
            None => self.program.display().to_string(),
        };
        tracing::debug!(command = %command_line, vars = env.len(), "starting shell");

        let status = command.status().map_err(|e| BakeError::CommandFailed {
            command: command_line.clone(),
            details: e.to_string(),
        })?;
        if !status.success() {
            return Err(BakeError::CommandFailed {
                command: command_line,
                details: status.to_string(),
            }
            .into());
        }
        Ok(())
    }
}
