/// Mock implementations for testing
mod mock_command_runner;
mod mock_license_finder;
mod mock_license_reader;
mod mock_notice_publisher;
mod mock_progress_reporter;

pub use mock_command_runner::MockCommandRunner;
pub use mock_license_finder::MockLicenseFinder;
pub use mock_license_reader::MockLicenseReader;
pub use mock_notice_publisher::MockNoticePublisher;
pub use mock_progress_reporter::MockProgressReporter;
