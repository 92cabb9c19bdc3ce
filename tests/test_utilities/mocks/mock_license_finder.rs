use bake::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock LicenseFinder returning a fixed list of license paths
#[derive(Clone, Default)]
pub struct MockLicenseFinder {
    pub paths: Vec<PathBuf>,
    pub should_fail: bool,
    /// Search directories of every call, in order
    pub searched: Arc<Mutex<Vec<Vec<PathBuf>>>>,
}

impl MockLicenseFinder {
    pub fn new(paths: &[&str]) -> Self {
        Self {
            paths: paths.iter().map(PathBuf::from).collect(),
            ..Self::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn searched(&self) -> Vec<Vec<PathBuf>> {
        self.searched.lock().unwrap().clone()
    }
}

impl LicenseFinder for MockLicenseFinder {
    fn find_licenses(&self, search_dirs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        self.searched.lock().unwrap().push(search_dirs.to_vec());
        if self.should_fail {
            return Err(BakeError::Scan {
                path: search_dirs.first().cloned().unwrap_or_default(),
                details: "Mock license finder failure".to_string(),
            }
            .into());
        }
        Ok(self.paths.clone())
    }
}
