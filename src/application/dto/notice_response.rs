use std::path::PathBuf;

/// NoticeResponse - outcome of a NOTICE generation or check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeResponse {
    /// The published NOTICE the operation wrote or compared against
    pub output: PathBuf,
    /// Number of license files discovered
    pub license_files: usize,
    /// Number of projects after deduplication
    pub project_count: usize,
    /// SHA-256 of the generated document; only computed by checks
    pub digest: Option<String>,
}

impl NoticeResponse {
    pub fn new(output: PathBuf, license_files: usize, project_count: usize) -> Self {
        Self {
            output,
            license_files,
            project_count,
            digest: None,
        }
    }

    pub fn with_digest(mut self, digest: String) -> Self {
        self.digest = Some(digest);
        self
    }
}
