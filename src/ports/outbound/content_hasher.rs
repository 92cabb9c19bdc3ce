use crate::shared::Result;
use std::path::Path;

/// ContentHasher port for fingerprinting file contents
pub trait ContentHasher {
    /// Returns a fixed-length lowercase hex digest of the file's bytes
    fn digest_file(&self, path: &Path) -> Result<String>;
}
