/// A third-party project listed in the NOTICE document
///
/// `name` is the import-path-like identifier found below the vendor
/// directory (e.g. `github.com/elastic/go-lumber`). `license_text` is either
/// a short canonical label or the verbatim license.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRecord {
    name: String,
    license_text: String,
}

impl ProjectRecord {
    pub fn new(name: impl Into<String>, license_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            license_text: license_text.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn license_text(&self) -> &str {
        &self.license_text
    }
}
