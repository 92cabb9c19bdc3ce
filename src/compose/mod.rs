/// Docker Compose domain - compose arguments, service port model and the
/// environment variables derived from published ports
mod config;
mod environment;
mod project;

pub use config::{ComposeConfig, ComposeService, PortEntry};
pub use environment::{env_key_prefix, host_key, normalize_host, port_key, split_host_port};
pub use project::{ComposeProject, COMPOSE_PROGRAM, DEFAULT_COMPOSE_FILE};
