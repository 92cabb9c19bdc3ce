use crate::shared::Result;
use std::path::PathBuf;

/// LicenseFinder port for discovering vendored license files
pub trait LicenseFinder {
    /// Recursively searches the given directories for license files
    ///
    /// A match is a regular file outside any `.git` directory, below a
    /// `vendor` directory, whose name starts with `LICENSE`.
    ///
    /// # Returns
    /// Matching paths in discovery order, roots processed in the order given
    ///
    /// # Errors
    /// Returns `BakeError::Scan` when a search directory cannot be walked at
    /// all. Failures on individual entries below a root are skipped.
    fn find_licenses(&self, search_dirs: &[PathBuf]) -> Result<Vec<PathBuf>>;
}
