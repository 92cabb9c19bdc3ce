use crate::notice_generation::services::VENDOR_DIR;
use crate::ports::outbound::{LicenseFinder, SourceFinder};
use crate::shared::error::BakeError;
use crate::shared::Result;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const GIT_DIR: &str = ".git";
const LICENSE_PREFIX: &str = "LICENSE";

/// WalkDirFinder adapter for locating files by walking directory trees
///
/// Implements LicenseFinder (vendored license files) and SourceFinder
/// (non-vendored Go sources). Directory entries are visited in file-name
/// order so discovery order is reproducible.
pub struct WalkDirFinder;

impl WalkDirFinder {
    pub fn new() -> Self {
        Self
    }

    /// Walks `root`, yielding regular files outside `.git`.
    ///
    /// An error at the root itself is fatal; errors below it are logged and
    /// skipped so one unreadable sibling does not abort the scan.
    fn regular_files(root: &Path) -> Result<Vec<DirEntry>> {
        let mut files = Vec::new();
        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || e.file_name() != OsStr::new(GIT_DIR));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if err.depth() == 0 => {
                    return Err(BakeError::Scan {
                        path: root.to_path_buf(),
                        details: err.to_string(),
                    }
                    .into());
                }
                Err(err) => {
                    tracing::debug!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if entry.file_type().is_file() {
                files.push(entry);
            }
        }
        Ok(files)
    }
}

impl Default for WalkDirFinder {
    fn default() -> Self {
        Self::new()
    }
}

/// True if any directory of `path` (the file name excluded) is named `dir`
fn has_ancestor_dir(path: &Path, dir: &str) -> bool {
    let Some(parent) = path.parent() else {
        return false;
    };
    parent
        .components()
        .any(|c| matches!(c, Component::Normal(name) if name == OsStr::new(dir)))
}

impl LicenseFinder for WalkDirFinder {
    fn find_licenses(&self, search_dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut licenses = Vec::new();
        for dir in search_dirs {
            for entry in Self::regular_files(dir)? {
                let path = entry.path();
                if !has_ancestor_dir(path, VENDOR_DIR) {
                    continue;
                }
                if entry
                    .file_name()
                    .to_string_lossy()
                    .starts_with(LICENSE_PREFIX)
                {
                    licenses.push(path.to_path_buf());
                }
            }
        }
        Ok(licenses)
    }
}

impl SourceFinder for WalkDirFinder {
    fn go_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let files = Self::regular_files(root)?
            .into_iter()
            .map(DirEntry::into_path)
            .filter(|p| p.extension() == Some(OsStr::new("go")))
            .filter(|p| !has_ancestor_dir(p, VENDOR_DIR))
            .collect();
        Ok(files)
    }
}
