use crate::ports::outbound::NoticePublisher;
use crate::shared::error::BakeError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::ffi::OsString;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

const STAGED_SUFFIX: &str = ".tmp";

/// AtomicFileWriter adapter for publishing files via stage-then-rename
///
/// The content is written to a temporary file next to the target and then
/// renamed over it, so readers never observe a truncated file. The staging
/// file is removed on every failure before the rename. When the rename itself
/// fails, the staged copy is kept for inspection and swept by the next publish
/// to the same path.
///
/// Concurrent publishes to the same path are not supported: the sweep also
/// removes a staging file another writer is still filling.
pub struct AtomicFileWriter;

impl AtomicFileWriter {
    pub fn new() -> Self {
        Self
    }

    fn publish_error(path: &Path, staged: Option<PathBuf>, details: impl ToString) -> anyhow::Error {
        BakeError::Publish {
            path: path.to_path_buf(),
            staged,
            details: details.to_string(),
        }
        .into()
    }

    /// Directory the target lives in; `""` means the current directory
    fn target_dir(path: &Path) -> PathBuf {
        match path.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Prefix of staging files for `path`, e.g. `.NOTICE.`
    fn staged_prefix(path: &Path) -> OsString {
        let mut prefix = OsString::from(".");
        prefix.push(path.file_name().unwrap_or_default());
        prefix.push(".");
        prefix
    }

    /// Removes staging files left behind by earlier failed publishes
    fn sweep_stale_staging(dir: &Path, prefix: &OsString) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        let prefix = prefix.to_string_lossy();
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with(prefix.as_ref()) && name.ends_with(STAGED_SUFFIX) {
                match fs::remove_file(entry.path()) {
                    Ok(()) => tracing::debug!(staged = %entry.path().display(), "removed stale staged file"),
                    Err(e) => tracing::warn!(staged = %entry.path().display(), error = %e, "failed to remove stale staged file"),
                }
            }
        }
    }
}

impl Default for AtomicFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticePublisher for AtomicFileWriter {
    fn publish(&self, path: &Path, content: &str) -> Result<()> {
        if path.file_name().is_none() {
            return Err(Self::publish_error(path, None, "output path has no file name"));
        }

        let dir = Self::target_dir(path);
        if !dir.is_dir() {
            return Err(Self::publish_error(
                path,
                None,
                format!("Parent directory does not exist: {}", dir.display()),
            ));
        }

        // Renaming over a symlink would silently replace the link itself.
        validate_not_symlink(path, "publish").map_err(|e| Self::publish_error(path, None, e))?;

        let prefix = Self::staged_prefix(path);
        Self::sweep_stale_staging(&dir, &prefix);

        let mut staged = tempfile::Builder::new()
            .prefix(&prefix)
            .suffix(STAGED_SUFFIX)
            .tempfile_in(&dir)
            .map_err(|e| Self::publish_error(path, None, format!("failed to create temp file: {}", e)))?;

        staged
            .write_all(content.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| Self::publish_error(path, None, format!("failed to write temp file: {}", e)))?;

        tracing::debug!(staged = %staged.path().display(), output = %path.display(), "renaming staged notice into place");

        staged.persist(path).map_err(|e| {
            let details = e.error.to_string();
            let kept = e.file.into_temp_path().keep().ok();
            Self::publish_error(path, kept, details)
        })?;

        Ok(())
    }
}
