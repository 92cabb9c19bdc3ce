use crate::compose::ComposeProject;
use std::path::PathBuf;

/// DockerRequest - parameters of the `docker` command
#[derive(Debug, Clone)]
pub struct DockerRequest {
    pub project: ComposeProject,
    /// File receiving the output of `docker-compose up`; discarded when unset
    pub log: Option<PathBuf>,
    /// Script run by bash instead of an interactive shell
    pub script: Option<PathBuf>,
}

impl DockerRequest {
    pub fn new(project: ComposeProject, log: Option<PathBuf>, script: Option<PathBuf>) -> Self {
        Self {
            project,
            log,
            script,
        }
    }
}
