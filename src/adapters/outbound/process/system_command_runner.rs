use crate::ports::outbound::{command_line, CommandOutput, CommandRunner};
use crate::shared::error::BakeError;
use crate::shared::Result;
use std::process::{Command, Stdio};

/// SystemCommandRunner adapter that executes programs found on `PATH`
///
/// Commands run in the current working directory with stdin closed.
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput> {
        tracing::debug!(command = %command_line(program, args), "running external command");

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| BakeError::CommandFailed {
                command: command_line(program, args),
                details: e.to_string(),
            })?;

        Ok(CommandOutput {
            success: output.status.success(),
            status: output.status.to_string(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
