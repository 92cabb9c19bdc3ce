use crate::ports::outbound::{command_line, CommandRunner, GoInstaller};
use crate::shared::error::BakeError;
use crate::shared::Result;
use crate::toolchain::parse_goroot;
use std::path::PathBuf;

const GVM_PROGRAM: &str = "gvm";

/// GvmInstaller adapter that installs Go through the `gvm` version manager
///
/// `gvm <version>` downloads the toolchain when missing and prints an
/// activation script whose GOROOT line locates it.
pub struct GvmInstaller<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> GvmInstaller<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }
}

impl<R: CommandRunner> GoInstaller for GvmInstaller<R> {
    fn install(&self, version: &str) -> Result<PathBuf> {
        let args = vec![version.to_string()];
        let stdout = self.runner.output(GVM_PROGRAM, &args)?;
        let script = String::from_utf8_lossy(&stdout);

        let goroot = parse_goroot(&script).ok_or_else(|| BakeError::CommandFailed {
            command: command_line(GVM_PROGRAM, &args),
            details: "output does not set GOROOT".to_string(),
        })?;
        tracing::debug!(version, goroot = %goroot.display(), "go toolchain ready");
        Ok(goroot)
    }
}
