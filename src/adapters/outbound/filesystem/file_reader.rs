use crate::ports::outbound::{LicenseReader, ProjectFileReader};
use crate::shared::error::BakeError;
use crate::shared::security::{validate_file_size, validate_regular_file};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest project metadata file read (1 MB)
const MAX_PROJECT_FILE_SIZE: u64 = 1024 * 1024;

/// FileSystemReader adapter for reading files from the file system
///
/// This adapter implements both LicenseReader and ProjectFileReader ports.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Reads a file after checking it is a regular file, within `max_size`
    /// bytes when a limit is given
    fn checked_read(&self, path: &Path, file_type: &str, max_size: Option<u64>) -> Result<Vec<u8>> {
        validate_regular_file(path, file_type)?;

        if let Some(max_size) = max_size {
            let metadata = fs::metadata(path)
                .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;
            validate_file_size(metadata.len(), path, max_size)?;
        }

        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl LicenseReader for FileSystemReader {
    /// License texts are read whole, whatever their size
    fn read_license(&self, path: &Path) -> Result<Vec<u8>> {
        self.checked_read(path, "license file", None)
            .map_err(|e| {
                BakeError::LicenseRead {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}

impl ProjectFileReader for FileSystemReader {
    fn read_project_file(&self, path: &Path) -> Result<String> {
        let bytes = self.checked_read(path, "project file", Some(MAX_PROJECT_FILE_SIZE))?;
        String::from_utf8(bytes)
            .map_err(|e| anyhow::anyhow!("{} is not valid UTF-8: {}", path.display(), e))
    }
}
