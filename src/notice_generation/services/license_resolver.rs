use crate::notice_generation::domain::ProjectRecord;
use crate::notice_generation::policies::LicenseCanonicalization;
use std::path::{Component, Path};

/// Name of the directory holding vendored third-party sources
pub const VENDOR_DIR: &str = "vendor";

/// LicenseResolver - turns a discovered license file into a ProjectRecord
pub struct LicenseResolver;

impl LicenseResolver {
    /// Builds the record for one license file from its path and raw contents
    pub fn resolve(path: &Path, contents: &[u8]) -> ProjectRecord {
        ProjectRecord::new(
            Self::project_name(path),
            LicenseCanonicalization::canonicalize(contents),
        )
    }

    /// Returns the project's Go import path: everything after the last
    /// vendor directory, minus the license file name itself.
    ///
    /// Segments are joined with `/` whatever the platform separator is.
    /// A path without a vendor directory is returned unchanged, and a license
    /// sitting directly in `vendor/` names the project `.`.
    pub fn project_name(path: &Path) -> String {
        let components: Vec<Component<'_>> = path.components().collect();
        let Some(vendor_index) = components
            .iter()
            .rposition(|c| matches!(c, Component::Normal(name) if *name == VENDOR_DIR))
        else {
            return path.to_string_lossy().into_owned();
        };

        let after_vendor = &components[vendor_index + 1..];
        if after_vendor.len() <= 1 {
            return ".".to_string();
        }

        after_vendor[..after_vendor.len() - 1]
            .iter()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
