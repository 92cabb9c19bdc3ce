/// Use cases module containing application business logic orchestration
mod generate_notice;
mod go_toolchain;
mod run_checks;
mod service_environment;
mod source_checks;

pub use generate_notice::NoticeUseCase;
pub use go_toolchain::GoToolchainUseCase;
pub use run_checks::RunChecksUseCase;
pub use service_environment::ServiceEnvironmentUseCase;
pub use source_checks::SourceChecksUseCase;
