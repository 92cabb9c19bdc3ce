use crate::ports::outbound::{command_line, ServiceLauncher};
use crate::shared::error::BakeError;
use crate::shared::Result;
use std::fs::File;
use std::path::Path;
use std::process::{Child, Command, Stdio};

/// Handle on a long-running child process such as `docker-compose up`
///
/// Dropping the handle interrupts the child (SIGINT on unix, kill elsewhere)
/// and waits for it to exit, so the child never outlives the caller on any
/// return path.
pub struct BackgroundProcess {
    command: String,
    child: Child,
}

impl BackgroundProcess {
    /// Starts `program` without waiting for it
    ///
    /// Output of the child goes to `log` when given and is discarded otherwise.
    pub fn spawn(program: &str, args: &[String], log: Option<&Path>) -> Result<Self> {
        let command = command_line(program, args);
        let (stdout, stderr) = match log {
            Some(path) => {
                let file = File::create(path).map_err(|e| BakeError::CommandFailed {
                    command: command.clone(),
                    details: format!("failed to create log file {}: {}", path.display(), e),
                })?;
                let clone = file.try_clone().map_err(|e| BakeError::CommandFailed {
                    command: command.clone(),
                    details: e.to_string(),
                })?;
                (Stdio::from(file), Stdio::from(clone))
            }
            None => (Stdio::null(), Stdio::null()),
        };

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(stderr)
            .spawn()
            .map_err(|e| BakeError::CommandFailed {
                command: command.clone(),
                details: e.to_string(),
            })?;

        tracing::debug!(command = %command, pid = child.id(), "started background process");
        Ok(Self { command, child })
    }

    pub fn id(&self) -> u32 {
        self.child.id()
    }

    #[cfg(unix)]
    fn interrupt(&mut self) -> std::io::Result<()> {
        let pid: libc::pid_t = self.child.id().try_into().map_err(|_| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "PID out of range")
        })?;

        let result = unsafe { libc::kill(pid, libc::SIGINT) };
        if result == 0 {
            Ok(())
        } else {
            Err(std::io::Error::last_os_error())
        }
    }

    #[cfg(not(unix))]
    fn interrupt(&mut self) -> std::io::Result<()> {
        self.child.kill()
    }
}

impl Drop for BackgroundProcess {
    fn drop(&mut self) {
        if let Ok(Some(status)) = self.child.try_wait() {
            tracing::debug!(command = %self.command, %status, "background process already exited");
            return;
        }
        if let Err(e) = self.interrupt() {
            tracing::warn!(command = %self.command, error = %e, "failed to interrupt background process");
            let _ = self.child.kill();
        }
        match self.child.wait() {
            Ok(status) => tracing::debug!(command = %self.command, %status, "background process stopped"),
            Err(e) => tracing::warn!(command = %self.command, error = %e, "failed to wait for background process"),
        }
    }
}

/// ProcessLauncher adapter that starts background processes as direct children
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceLauncher for ProcessLauncher {
    type Handle = BackgroundProcess;

    fn launch(&self, program: &str, args: &[String], log: Option<&Path>) -> Result<BackgroundProcess> {
        BackgroundProcess::spawn(program, args, log)
    }
}
