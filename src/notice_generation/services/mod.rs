mod license_resolver;
mod notice_renderer;
mod project_catalog;

pub use license_resolver::{LicenseResolver, VENDOR_DIR};
pub use notice_renderer::NoticeRenderer;
pub use project_catalog::ProjectCatalog;
