use crate::application::dto::CheckStatus;
use crate::notice_generation::services::VENDOR_DIR;
use crate::ports::outbound::{command_line, CommandRunner, SourceFinder};
use crate::shared::error::BakeError;
use crate::shared::Result;
use std::path::Path;

const GOFMT: &str = "gofmt";
const GO: &str = "go";

const FMT_VIOLATION: &str = "some files need to be formatted with gofmt -s";
const VET_VIOLATION: &str = "some files have go vet errors";

/// SourceChecksUseCase - gofmt and go vet over the project's own Go code
///
/// External tools run in the current working directory; `root` only selects
/// which files are handed to gofmt.
pub struct SourceChecksUseCase<S, R> {
    source_finder: S,
    runner: R,
}

impl<S, R> SourceChecksUseCase<S, R>
where
    S: SourceFinder,
    R: CommandRunner,
{
    pub fn new(source_finder: S, runner: R) -> Self {
        Self {
            source_finder,
            runner,
        }
    }

    /// Rewrites unformatted files with `gofmt -s -w` and returns their names
    pub fn format(&self, root: &Path) -> Result<Vec<String>> {
        self.gofmt(root, &["-s", "-w", "-l"])
    }

    /// Lists files `gofmt -s` would change without touching them
    pub fn check_fmt(&self, root: &Path) -> Result<CheckStatus> {
        let files = self.gofmt(root, &["-s", "-l"])?;
        if files.is_empty() {
            return Ok(CheckStatus::Passed);
        }
        Ok(CheckStatus::Failed {
            findings: files,
            message: FMT_VIOLATION.to_string(),
        })
    }

    /// Runs `go vet` over every non-vendor package
    ///
    /// Diagnostics are findings even when vet exits non-zero; only a run that
    /// fails without printing anything is an error.
    pub fn check_vet(&self) -> Result<CheckStatus> {
        let packages = self.go_packages()?;
        if packages.is_empty() {
            tracing::debug!("no go packages to vet");
            return Ok(CheckStatus::Passed);
        }

        let mut args = Vec::with_capacity(packages.len() + 1);
        args.push("vet".to_string());
        args.extend(packages);
        let output = self.runner.run(GO, &args)?;

        let findings: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .chain(String::from_utf8_lossy(&output.stderr).lines())
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect();

        match (output.success, findings.is_empty()) {
            (true, true) => Ok(CheckStatus::Passed),
            (false, true) => Err(BakeError::CommandFailed {
                command: command_line(GO, &args),
                details: output.status,
            }
            .into()),
            (_, false) => Ok(CheckStatus::Failed {
                findings,
                message: VET_VIOLATION.to_string(),
            }),
        }
    }

    /// Non-vendor packages reported by `go list ./...`
    fn go_packages(&self) -> Result<Vec<String>> {
        let stdout = self
            .runner
            .output(GO, &["list".to_string(), "./...".to_string()])?;
        Ok(String::from_utf8_lossy(&stdout)
            .lines()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .filter(|p| !p.split(['/', '\\']).any(|segment| segment == VENDOR_DIR))
            .map(str::to_string)
            .collect())
    }

    fn gofmt(&self, root: &Path, flags: &[&str]) -> Result<Vec<String>> {
        let files = self.source_finder.go_files(root)?;
        if files.is_empty() {
            tracing::debug!(root = %root.display(), "no go files found");
            return Ok(Vec::new());
        }

        let mut args: Vec<String> = flags.iter().map(|f| f.to_string()).collect();
        args.extend(files.iter().map(|f| {
            f.strip_prefix(".")
                .unwrap_or(f)
                .display()
                .to_string()
        }));

        let stdout = self.runner.output(GOFMT, &args)?;
        Ok(String::from_utf8_lossy(&stdout)
            .split_whitespace()
            .map(str::to_string)
            .collect())
    }
}
