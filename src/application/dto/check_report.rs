use crate::shared::error::{BakeError, ExitCode};

/// A named check of the `check` command
///
/// Shared by the CLI (positional arguments), the config file (`checks:`)
/// and the check runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    /// Source files are `gofmt -s` clean
    Fmt,
    /// `go vet` reports nothing
    Vet,
    /// The published NOTICE is up to date
    Notice,
}

impl CheckKind {
    /// Every check, in the order they run by default
    pub const ALL: [CheckKind; 3] = [CheckKind::Fmt, CheckKind::Vet, CheckKind::Notice];
}

impl std::str::FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fmt" => Ok(CheckKind::Fmt),
            "vet" => Ok(CheckKind::Vet),
            "notice" => Ok(CheckKind::Notice),
            _ => Err(format!(
                "Invalid check: {}. Please specify 'fmt', 'vet' or 'notice'",
                s
            )),
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckKind::Fmt => write!(f, "fmt"),
            CheckKind::Vet => write!(f, "vet"),
            CheckKind::Notice => write!(f, "notice"),
        }
    }
}

/// Result of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Passed,
    /// The check ran and found violations
    Failed {
        /// Offending files or tool output lines, printed one per line
        findings: Vec<String>,
        message: String,
    },
    /// The check could not run to completion
    Errored(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    pub status: CheckStatus,
}

/// CheckReport - outcomes of every check in the order they ran
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn push(&mut self, kind: CheckKind, status: CheckStatus) {
        self.outcomes.push(CheckOutcome { kind, status });
    }

    /// Number of checks that did not pass
    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status != CheckStatus::Passed)
            .count()
    }

    /// A check that could not run outweighs one that found violations
    pub fn exit_code(&self) -> ExitCode {
        let statuses = || self.outcomes.iter().map(|o| &o.status);
        if statuses().any(|s| matches!(s, CheckStatus::Errored(_))) {
            ExitCode::ApplicationError
        } else if statuses().any(|s| matches!(s, CheckStatus::Failed { .. })) {
            ExitCode::CheckFailed
        } else {
            ExitCode::Success
        }
    }

    /// The aggregate error to report, if any check did not pass
    pub fn failure(&self) -> Option<BakeError> {
        let failed = self.failed_count();
        (failed > 0).then(|| BakeError::ChecksFailed {
            failed,
            total: self.outcomes.len(),
        })
    }
}
