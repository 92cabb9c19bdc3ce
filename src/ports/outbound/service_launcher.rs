use crate::shared::Result;
use std::path::Path;

/// ServiceLauncher port for starting a process that keeps running in the
/// background (`docker-compose up`)
pub trait ServiceLauncher {
    /// Handle that stops the process when dropped
    type Handle;

    /// Starts `program`; its output goes to `log` or is discarded
    fn launch(&self, program: &str, args: &[String], log: Option<&Path>) -> Result<Self::Handle>;
}
