use std::path::PathBuf;

/// External orchestrator binary
pub const COMPOSE_PROGRAM: &str = "docker-compose";

/// Compose file used when none is given
pub const DEFAULT_COMPOSE_FILE: &str = "docker-compose.yml";

/// The global docker-compose arguments shared by every invocation
/// (`-p <project>` and one `-f <file>` per compose file)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeProject {
    project: Option<String>,
    files: Vec<PathBuf>,
}

impl ComposeProject {
    pub fn new(project: Option<String>, files: Vec<PathBuf>) -> Self {
        let files = if files.is_empty() {
            vec![PathBuf::from(DEFAULT_COMPOSE_FILE)]
        } else {
            files
        };
        Self { project, files }
    }

    /// Global arguments followed by `extra`
    pub fn args<S: AsRef<str>>(&self, extra: &[S]) -> Vec<String> {
        let mut args = Vec::with_capacity(self.files.len() * 2 + 2 + extra.len());
        if let Some(project) = self.project.as_deref().filter(|p| !p.is_empty()) {
            args.push("-p".to_string());
            args.push(project.to_string());
        }
        for file in &self.files {
            args.push("-f".to_string());
            args.push(file.display().to_string());
        }
        args.extend(extra.iter().map(|s| s.as_ref().to_string()));
        args
    }
}
