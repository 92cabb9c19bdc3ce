use crate::shared::Result;
use std::path::Path;

/// NoticePublisher port for making a rendered NOTICE visible at its path
///
/// Implementations must be all-or-nothing: a reader of `path` sees either
/// the previous contents or the complete new document, never a partial one.
pub trait NoticePublisher {
    /// # Errors
    /// Returns `BakeError::Publish` if staging or the final move fails; the
    /// previous file at `path`, if any, is left untouched
    fn publish(&self, path: &Path, content: &str) -> Result<()>;
}
