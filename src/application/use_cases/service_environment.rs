use crate::application::dto::DockerRequest;
use crate::compose::{
    host_key, normalize_host, port_key, split_host_port, ComposeConfig, ComposeProject,
    COMPOSE_PROGRAM,
};
use crate::ports::outbound::{CommandRunner, ServiceLauncher, ShellRunner};
use crate::shared::Result;
use anyhow::Context;
use std::collections::BTreeMap;

/// ServiceEnvironmentUseCase - starts the compose services and opens a shell
/// whose environment points at their published ports
///
/// # Type Parameters
/// * `R` - CommandRunner for `docker-compose config` and `docker-compose port`
/// * `L` - ServiceLauncher for `docker-compose up`
/// * `SH` - ShellRunner for the final shell
pub struct ServiceEnvironmentUseCase<R, L, SH> {
    runner: R,
    launcher: L,
    shell: SH,
}

impl<R, L, SH> ServiceEnvironmentUseCase<R, L, SH>
where
    R: CommandRunner,
    L: ServiceLauncher,
    SH: ShellRunner,
{
    pub fn new(runner: R, launcher: L, shell: SH) -> Self {
        Self {
            runner,
            launcher,
            shell,
        }
    }

    /// Runs the shell with the services up; they are stopped again on return
    pub fn execute(&self, request: &DockerRequest) -> Result<()> {
        let config = self.load_config(&request.project)?;

        let _services = self.launcher.launch(
            COMPOSE_PROGRAM,
            &request.project.args(&["up"]),
            request.log.as_deref(),
        )?;

        let env = self.service_environment(&request.project, &config);
        self.shell.run_shell(request.script.as_deref(), &env)
    }

    /// Parses the merged compose configuration
    pub fn load_config(&self, project: &ComposeProject) -> Result<ComposeConfig> {
        let yaml = self
            .runner
            .output(COMPOSE_PROGRAM, &project.args(&["config"]))
            .context("failed to get docker-compose config")?;
        ComposeConfig::parse(&yaml)
    }

    /// `<SERVICE>_HOST` and `<SERVICE>_PORT_<port>_TCP_PORT` for every
    /// published port
    ///
    /// A port whose mapping cannot be resolved gets empty values so scripts
    /// see the service as unavailable instead of the whole command failing.
    pub fn service_environment(
        &self,
        project: &ComposeProject,
        config: &ComposeConfig,
    ) -> BTreeMap<String, String> {
        let mut env = BTreeMap::new();
        for (service, port) in config.service_ports() {
            let (host, mapped_port) = match self.port_mapping(project, &service, &port) {
                Ok(mapping) => mapping,
                Err(e) => {
                    tracing::error!(service = %service, port = %port, error = %format!("{:#}", e), "service will be unavailable");
                    (String::new(), String::new())
                }
            };

            let host_entry = env.entry(host_key(&service)).or_insert_with(String::new);
            if host_entry.is_empty() {
                *host_entry = host;
            }
            env.insert(port_key(&service, &port), mapped_port);
        }
        env
    }

    fn port_mapping(
        &self,
        project: &ComposeProject,
        service: &str,
        port: &str,
    ) -> Result<(String, String)> {
        let stdout = self
            .runner
            .output(COMPOSE_PROGRAM, &project.args(&["port", service, port]))
            .with_context(|| {
                format!(
                    "failed to get docker-compose port mapping for {}:{}",
                    service, port
                )
            })?;

        let mapping = String::from_utf8_lossy(&stdout).trim().to_string();
        tracing::info!(service, mapping = %mapping, port, "service port mapping");
        let (host, mapped_port) = split_host_port(&mapping)?;
        Ok((normalize_host(&host), mapped_port))
    }
}
