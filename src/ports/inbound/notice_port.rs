use crate::application::dto::{NoticeRequest, NoticeResponse};
use crate::shared::Result;

/// NoticePort - Inbound port for the NOTICE use cases
pub trait NoticePort {
    /// Generates the NOTICE document and publishes it at `request.output`
    ///
    /// # Errors
    /// Returns `BakeError::Scan`, `LicenseRead`, `Render` or `Publish`. On any
    /// of them an existing NOTICE file is left untouched.
    fn generate(&self, request: &NoticeRequest) -> Result<NoticeResponse>;

    /// Regenerates the NOTICE into a scratch location and compares it with
    /// the published one
    ///
    /// # Errors
    /// Returns `BakeError::Drift` if the contents differ or the published file
    /// is missing or unreadable, or any generation error.
    fn check(&self, request: &NoticeRequest) -> Result<NoticeResponse>;
}
