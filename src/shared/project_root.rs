use crate::shared::error::BakeError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Searches upwards from `start` for the directory containing `.git`.
///
/// This should return the same value as `git rev-parse --show-toplevel`
/// for a normal clone. `.git` may be a file (worktrees, submodules).
pub fn find_git_project_root(start: &Path) -> Result<PathBuf> {
    let mut dir = start;
    loop {
        match std::fs::symlink_metadata(dir.join(".git")) {
            Ok(_) => return Ok(dir.to_path_buf()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("Failed to inspect {}", dir.join(".git").display())))
            }
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => {
                return Err(BakeError::ProjectRootNotFound {
                    start: start.to_path_buf(),
                }
                .into())
            }
        }
    }
}
