use crate::application::dto::{NoticeRequest, NoticeResponse};
use crate::notice_generation::domain::{NoticeDocument, ProjectRecord};
use crate::notice_generation::services::{LicenseResolver, NoticeRenderer, ProjectCatalog};
use crate::ports::inbound::NoticePort;
use crate::ports::outbound::{
    ContentHasher, LicenseFinder, LicenseReader, NoticePublisher, ProgressReporter,
};
use crate::shared::error::BakeError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// File name used for the scratch copy when the output has none
const SCRATCH_NAME: &str = "NOTICE";

/// A rendered NOTICE together with the counts reported back to the caller
struct RenderedNotice {
    content: String,
    license_files: usize,
    project_count: usize,
}

/// NoticeUseCase - generates the NOTICE file and checks it for drift
///
/// Orchestrates the pipeline scan → resolve → deduplicate/sort → render →
/// publish using generic dependency injection for all infrastructure.
///
/// # Type Parameters
/// * `F` - LicenseFinder implementation
/// * `L` - LicenseReader implementation
/// * `P` - NoticePublisher implementation
/// * `H` - ContentHasher implementation
/// * `PR` - ProgressReporter implementation
pub struct NoticeUseCase<F, L, P, H, PR> {
    license_finder: F,
    license_reader: L,
    publisher: P,
    hasher: H,
    progress_reporter: PR,
}

impl<F, L, P, H, PR> NoticeUseCase<F, L, P, H, PR>
where
    F: LicenseFinder,
    L: LicenseReader,
    P: NoticePublisher,
    H: ContentHasher,
    PR: ProgressReporter,
{
    /// Creates a new NoticeUseCase with injected dependencies
    pub fn new(
        license_finder: F,
        license_reader: L,
        publisher: P,
        hasher: H,
        progress_reporter: PR,
    ) -> Self {
        Self {
            license_finder,
            license_reader,
            publisher,
            hasher,
            progress_reporter,
        }
    }

    /// Runs everything up to and including rendering; nothing is written
    fn render(&self, request: &NoticeRequest) -> Result<RenderedNotice> {
        self.progress_reporter.report(&format!(
            "🔍 Searching {} directory(ies) for vendored licenses",
            request.search_dirs.len()
        ));
        let license_files = self.license_finder.find_licenses(&request.search_dirs)?;
        tracing::debug!(dirs = ?request.search_dirs, licenses = license_files.len(), "license scan finished");

        let records = self.resolve_licenses(&license_files)?;
        let projects = ProjectCatalog::build(records);
        let project_count = projects.len();

        let document = NoticeDocument::new(
            &request.product_name,
            &request.copyright_holder,
            request.start_year,
            request.end_year,
            projects,
        );
        let content = NoticeRenderer::render(&document)?;

        Ok(RenderedNotice {
            content,
            license_files: license_files.len(),
            project_count,
        })
    }

    /// Reads and resolves each license file, reporting progress
    ///
    /// # Errors
    /// The first unreadable license aborts the whole generation.
    fn resolve_licenses(&self, license_files: &[PathBuf]) -> Result<Vec<ProjectRecord>> {
        let total = license_files.len();
        let mut records = Vec::with_capacity(total);
        for (index, path) in license_files.iter().enumerate() {
            let name = LicenseResolver::project_name(path);
            self.progress_reporter
                .report_progress(index + 1, total, Some(&name));

            let contents = match self.license_reader.read_license(path) {
                Ok(contents) => contents,
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("❌ Cannot read {}", path.display()));
                    return Err(e);
                }
            };
            records.push(LicenseResolver::resolve(path, &contents));
        }
        Ok(records)
    }

    /// Hashes the published NOTICE, mapping every failure to drift
    fn published_digest(&self, output: &Path) -> Result<String> {
        if !output.exists() {
            return Err(BakeError::Drift {
                path: output.to_path_buf(),
                reason: "file does not exist".to_string(),
            }
            .into());
        }
        self.hasher.digest_file(output).map_err(|e| {
            BakeError::Drift {
                path: output.to_path_buf(),
                reason: format!("failed reading existing NOTICE file: {:#}", e),
            }
            .into()
        })
    }
}

impl<F, L, P, H, PR> NoticePort for NoticeUseCase<F, L, P, H, PR>
where
    F: LicenseFinder,
    L: LicenseReader,
    P: NoticePublisher,
    H: ContentHasher,
    PR: ProgressReporter,
{
    fn generate(&self, request: &NoticeRequest) -> Result<NoticeResponse> {
        let rendered = self.render(request)?;
        self.publisher.publish(&request.output, &rendered.content)?;

        tracing::info!(
            output = %request.output.display(),
            licenses = rendered.license_files,
            projects = rendered.project_count,
            "NOTICE published"
        );
        self.progress_reporter.report_completion(&format!(
            "✅ Wrote {} project(s) to {}",
            rendered.project_count,
            request.output.display()
        ));

        Ok(NoticeResponse::new(
            request.output.clone(),
            rendered.license_files,
            rendered.project_count,
        ))
    }

    fn check(&self, request: &NoticeRequest) -> Result<NoticeResponse> {
        let scratch_dir = tempfile::TempDir::new()
            .map_err(|e| anyhow::anyhow!("Failed to create scratch directory: {}", e))?;
        let file_name = request
            .output
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SCRATCH_NAME));
        let scratch = scratch_dir.path().join(file_name);

        let rendered = self.render(request)?;
        self.publisher.publish(&scratch, &rendered.content)?;

        let existing = self.published_digest(&request.output)?;
        let generated = self.hasher.digest_file(&scratch)?;
        tracing::info!(notice_sha256 = %existing, new_sha256 = %generated, "calculated sha256 file sums");

        if existing != generated {
            return Err(BakeError::Drift {
                path: request.output.clone(),
                reason: "contents differ from a fresh generation".to_string(),
            }
            .into());
        }

        self.progress_reporter
            .report_completion(&format!("✅ {} is up to date", request.output.display()));
        Ok(NoticeResponse::new(
            request.output.clone(),
            rendered.license_files,
            rendered.project_count,
        )
        .with_digest(generated))
    }
}
