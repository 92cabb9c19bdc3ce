use crate::shared::Result;
use std::path::Path;

/// LicenseReader port for loading the raw bytes of a license file
pub trait LicenseReader {
    /// # Errors
    /// Returns `BakeError::LicenseRead` if the file cannot be opened or fully read
    fn read_license(&self, path: &Path) -> Result<Vec<u8>>;
}
