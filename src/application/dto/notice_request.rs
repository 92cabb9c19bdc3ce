use chrono::Datelike;
use std::path::PathBuf;

/// NoticeRequest - parameters of one NOTICE generation or check
///
/// Built by the CLI from flags, `bake.config.yml` and the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeRequest {
    /// Where the NOTICE is published
    pub output: PathBuf,
    /// Directories searched for vendored license files, in order
    pub search_dirs: Vec<PathBuf>,
    pub product_name: String,
    pub copyright_holder: String,
    pub start_year: i32,
    /// Last copyright year; the current local year unless overridden
    pub end_year: i32,
}

impl NoticeRequest {
    pub fn new(
        output: PathBuf,
        search_dirs: Vec<PathBuf>,
        product_name: impl Into<String>,
        copyright_holder: impl Into<String>,
        start_year: i32,
    ) -> Self {
        Self {
            output,
            search_dirs,
            product_name: product_name.into(),
            copyright_holder: copyright_holder.into(),
            start_year,
            end_year: chrono::Local::now().year(),
        }
    }

    /// Pins the end year, mostly for reproducible tests
    pub fn with_end_year(mut self, end_year: i32) -> Self {
        self.end_year = end_year;
        self
    }
}
