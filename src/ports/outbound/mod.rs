/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, processes, console).
pub mod command_runner;
pub mod content_hasher;
pub mod go_installer;
pub mod license_finder;
pub mod license_reader;
pub mod notice_publisher;
pub mod progress_reporter;
pub mod project_file_reader;
pub mod service_launcher;
pub mod shell_runner;
pub mod source_finder;

pub use command_runner::{command_line, CommandOutput, CommandRunner};
pub use content_hasher::ContentHasher;
pub use go_installer::GoInstaller;
pub use license_finder::LicenseFinder;
pub use license_reader::LicenseReader;
pub use notice_publisher::NoticePublisher;
pub use progress_reporter::ProgressReporter;
pub use project_file_reader::ProjectFileReader;
pub use service_launcher::ServiceLauncher;
pub use shell_runner::ShellRunner;
pub use source_finder::SourceFinder;
