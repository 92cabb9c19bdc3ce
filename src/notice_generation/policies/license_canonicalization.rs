/// Marker identifying the Apache license family in a license text
const APACHE_MARKER: &str = "Apache License";

/// Canonical label stored instead of the full Apache license text
const APACHE_LABEL: &str = "Apache License";

/// LicenseCanonicalization policy for shortening well-known license texts
///
/// Only the Apache family is recognised; every other license is kept
/// verbatim. Widening the set would change published NOTICE contents.
pub struct LicenseCanonicalization;

impl LicenseCanonicalization {
    /// Converts raw license file bytes into the text stored in the NOTICE
    ///
    /// Line endings are normalised (CRLF → LF) before the marker test, and
    /// invalid UTF-8 sequences are replaced.
    pub fn canonicalize(raw: &[u8]) -> String {
        let text = String::from_utf8_lossy(raw).replace("\r\n", "\n");
        if text.contains(APACHE_MARKER) {
            APACHE_LABEL.to_string()
        } else {
            text
        }
    }
}
