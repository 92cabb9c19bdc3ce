mod background_process;
mod gvm_installer;
mod shell;
mod system_command_runner;

pub use background_process::{BackgroundProcess, ProcessLauncher};
pub use gvm_installer::GvmInstaller;
pub use shell::BashShell;
pub use system_command_runner::SystemCommandRunner;
