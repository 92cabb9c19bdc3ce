/// Data Transfer Objects for application layer
///
/// DTOs carry the merged command-line and config file settings into the use
/// cases and their results back out, keeping the domain layer isolated.
mod check_report;
mod docker_request;
mod notice_request;
mod notice_response;

pub use check_report::{CheckKind, CheckOutcome, CheckReport, CheckStatus};
pub use docker_request::DockerRequest;
pub use notice_request::NoticeRequest;
pub use notice_response::NoticeResponse;
