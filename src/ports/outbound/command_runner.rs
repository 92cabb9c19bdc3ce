use crate::shared::error::BakeError;
use crate::shared::Result;

/// Captured result of a finished external command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status zero
    pub success: bool,
    /// Exit status as reported by the platform, e.g. `exit status: 2`
    pub status: String,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// A successful run that printed `stdout`
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            success: true,
            status: "exit status: 0".to_string(),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// A run that exited non-zero after printing `stderr`
    pub fn failed(code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            success: false,
            status: format!("exit status: {}", code),
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }
}

/// Renders `program args...` the way it would be typed in a shell
pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// CommandRunner port for invoking external tools
/// (`gofmt`, `go`, `docker-compose`, `gvm`)
pub trait CommandRunner {
    /// Runs `program` with `args` to completion, capturing both streams
    ///
    /// # Errors
    /// Returns `BakeError::CommandFailed` only when the program cannot be
    /// started. A non-zero exit is reported through `CommandOutput::success`.
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput>;

    /// Runs `program` and returns its stdout, treating a non-zero exit as an error
    ///
    /// # Errors
    /// Returns `BakeError::CommandFailed` carrying the full command line, the
    /// exit status and the captured stderr.
    fn output(&self, program: &str, args: &[String]) -> Result<Vec<u8>> {
        let output = self.run(program, args)?;
        if output.success {
            return Ok(output.stdout);
        }
        Err(BakeError::CommandFailed {
            command: command_line(program, args),
            details: format!(
                "{} (stderr={})",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim_end()
            ),
        }
        .into())
    }
}
