pub mod notice_document;
pub mod project;

pub use notice_document::NoticeDocument;
pub use project::ProjectRecord;
