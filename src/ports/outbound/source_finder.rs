use crate::shared::Result;
use std::path::{Path, PathBuf};

/// SourceFinder port for listing the project's own Go sources
pub trait SourceFinder {
    /// Returns every regular `.go` file below `root` that is not vendored
    fn go_files(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
