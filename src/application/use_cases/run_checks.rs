use crate::application::dto::{CheckKind, CheckReport, CheckStatus, NoticeRequest};
use crate::application::use_cases::SourceChecksUseCase;
use crate::ports::inbound::NoticePort;
use crate::ports::outbound::{CommandRunner, SourceFinder};
use crate::shared::error::BakeError;
use crate::shared::Result;
use std::path::PathBuf;

/// RunChecksUseCase - runs a list of checks and collects every outcome
///
/// A failing or erroring check never stops the ones after it.
pub struct RunChecksUseCase<'a, S, R, N> {
    source_checks: &'a SourceChecksUseCase<S, R>,
    notice: &'a N,
    notice_request: &'a NoticeRequest,
    source_root: PathBuf,
}

impl<'a, S, R, N> RunChecksUseCase<'a, S, R, N>
where
    S: SourceFinder,
    R: CommandRunner,
    N: NoticePort,
{
    pub fn new(
        source_checks: &'a SourceChecksUseCase<S, R>,
        notice: &'a N,
        notice_request: &'a NoticeRequest,
        source_root: PathBuf,
    ) -> Self {
        Self {
            source_checks,
            notice,
            notice_request,
            source_root,
        }
    }

    /// Runs `checks` in order; an empty list runs all of them
    pub fn execute(&self, checks: &[CheckKind]) -> CheckReport {
        let checks = if checks.is_empty() {
            &CheckKind::ALL[..]
        } else {
            checks
        };

        let mut report = CheckReport::default();
        for &kind in checks {
            tracing::debug!(check = %kind, "running check");
            let status = match self.run_one(kind) {
                Ok(status) => status,
                Err(e) => {
                    tracing::debug!(check = %kind, error = %e, "check could not run");
                    CheckStatus::Errored(format!("{:#}", e))
                }
            };
            report.push(kind, status);
        }
        report
    }

    fn run_one(&self, kind: CheckKind) -> Result<CheckStatus> {
        match kind {
            CheckKind::Fmt => self.source_checks.check_fmt(&self.source_root),
            CheckKind::Vet => self.source_checks.check_vet(),
            CheckKind::Notice => self.check_notice(),
        }
    }

    /// Drift is a violation; any other failure means the check did not run
    fn check_notice(&self) -> Result<CheckStatus> {
        let Err(e) = self.notice.check(self.notice_request) else {
            return Ok(CheckStatus::Passed);
        };
        if let Some(drift @ BakeError::Drift { .. }) = e.downcast_ref::<BakeError>() {
            return Ok(CheckStatus::Failed {
                findings: Vec::new(),
                message: drift.to_string(),
            });
        }
        Err(e)
    }
}
