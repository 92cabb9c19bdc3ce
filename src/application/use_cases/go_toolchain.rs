use crate::ports::outbound::{GoInstaller, ProjectFileReader};
use crate::shared::error::BakeError;
use crate::shared::Result;
use crate::toolchain::{
    parse_travis_go_version, parse_version_asciidoc, ActivationScript, ShellKind, TRAVIS_YML,
    VERSION_ASCIIDOC,
};
use std::path::{Path, PathBuf};

/// GoToolchainUseCase - detects the project's Go version and prepares a
/// matching toolchain
pub struct GoToolchainUseCase<FR, GI> {
    file_reader: FR,
    installer: GI,
    project_root: PathBuf,
}

impl<FR, GI> GoToolchainUseCase<FR, GI>
where
    FR: ProjectFileReader,
    GI: GoInstaller,
{
    pub fn new(file_reader: FR, installer: GI, project_root: PathBuf) -> Self {
        Self {
            file_reader,
            installer,
            project_root,
        }
    }

    /// Go version declared by the project
    ///
    /// `libbeat/docs/version.asciidoc` wins over `.travis.yml`; why each
    /// source was rejected is logged.
    pub fn project_go_version(&self) -> Result<String> {
        match self.read_declared(VERSION_ASCIIDOC, parse_version_asciidoc) {
            Ok(version) => return Ok(version),
            Err(e) => tracing::error!(source = VERSION_ASCIIDOC, error = %format!("{:#}", e), "go version not found"),
        }
        match self.read_declared(TRAVIS_YML, parse_travis_go_version) {
            Ok(version) => return Ok(version),
            Err(e) => tracing::error!(source = TRAVIS_YML, error = %format!("{:#}", e), "go version not found"),
        }
        Err(BakeError::GoVersionNotFound.into())
    }

    /// Shell commands activating the requested Go version
    ///
    /// # Arguments
    /// * `version` - Explicit version; ignored when `use_project_version` is set
    /// * `use_project_version` - Use the version declared by the project
    /// * `shell` - Dialect of the returned script
    /// * `current_path` - Current `PATH`, spelled out by `cmd.exe` scripts
    pub fn activation_script(
        &self,
        version: Option<&str>,
        use_project_version: bool,
        shell: ShellKind,
        current_path: &str,
    ) -> Result<String> {
        let version = if use_project_version {
            self.project_go_version()?
        } else {
            version.unwrap_or_default().trim().to_string()
        };
        if version.is_empty() {
            anyhow::bail!("no version specified");
        }
        tracing::debug!(version = %version, "using go version");

        let goroot = self.installer.install(&version)?;
        Ok(ActivationScript::render(shell, &goroot, &version, current_path))
    }

    fn read_declared(&self, relative: &str, parse: fn(&str) -> Option<String>) -> Result<String> {
        let path = self.project_root.join(Path::new(relative));
        let content = self.file_reader.read_project_file(&path)?;
        parse(&content).ok_or_else(|| anyhow::anyhow!("go version not declared in {}", path.display()))
    }
}
