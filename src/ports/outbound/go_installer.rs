use crate::shared::Result;
use std::path::PathBuf;

/// GoInstaller port for obtaining a Go toolchain of a given version
pub trait GoInstaller {
    /// Installs `version` if needed and returns its GOROOT
    fn install(&self, version: &str) -> Result<PathBuf>;
}
