use bake::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock LicenseReader serving license bytes from memory
///
/// Paths without registered contents fail like a missing file would.
#[derive(Clone, Default)]
pub struct MockLicenseReader {
    pub contents: HashMap<PathBuf, Vec<u8>>,
}

impl MockLicenseReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, path: &str, contents: &str) -> Self {
        self.contents
            .insert(PathBuf::from(path), contents.as_bytes().to_vec());
        self
    }
}

impl LicenseReader for MockLicenseReader {
    fn read_license(&self, path: &Path) -> Result<Vec<u8>> {
        self.contents.get(path).cloned().ok_or_else(|| {
            BakeError::LicenseRead {
                path: path.to_path_buf(),
                details: "No such file or directory (os error 2)".to_string(),
            }
            .into()
        })
    }
}
