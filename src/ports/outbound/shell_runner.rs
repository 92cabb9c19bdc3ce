use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::Path;

/// ShellRunner port for handing control to a shell with extra environment
pub trait ShellRunner {
    /// Runs `script` (or an interactive shell when `None`) with the current
    /// environment plus `env`, waiting for it to exit
    ///
    /// # Errors
    /// Returns `BakeError::CommandFailed` if the shell cannot start or exits
    /// unsuccessfully
    fn run_shell(&self, script: Option<&Path>, env: &BTreeMap<String, String>) -> Result<()>;
}
