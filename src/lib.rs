//! bake - build automation for Beats projects
//!
//! The core of this library generates the NOTICE file that lists every
//! vendored third-party project with its license, and checks a published
//! NOTICE for drift. Around it sit the source checks (`gofmt`, `go vet`),
//! the Docker Compose test environment and Go toolchain selection.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`notice_generation`, `compose`, `toolchain`): Pure logic and domain models
//! - **Application Layer** (`application`): Use cases and DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bake::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create use case with the default adapters
//! let use_case = NoticeUseCase::new(
//!     WalkDirFinder::new(),
//!     FileSystemReader::new(),
//!     AtomicFileWriter::new(),
//!     Sha256Hasher::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let request = NoticeRequest::new(
//!     PathBuf::from("NOTICE"),
//!     vec![PathBuf::from(".")],
//!     "Elastic Beats",
//!     "Elasticsearch BV",
//!     2014,
//! );
//! let response = use_case.generate(&request)?;
//! println!("{} projects", response.project_count);
//!
//! // Verify nothing drifted
//! use_case.check(&request)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod compose;
pub mod notice_generation;
pub mod ports;
pub mod shared;
pub mod toolchain;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        AtomicFileWriter, FileSystemReader, Sha256Hasher, WalkDirFinder,
    };
    pub use crate::adapters::outbound::process::{
        BashShell, GvmInstaller, ProcessLauncher, SystemCommandRunner,
    };
    pub use crate::application::dto::{
        CheckKind, CheckOutcome, CheckReport, CheckStatus, DockerRequest, NoticeRequest,
        NoticeResponse,
    };
    pub use crate::application::use_cases::{
        GoToolchainUseCase, NoticeUseCase, RunChecksUseCase, ServiceEnvironmentUseCase,
        SourceChecksUseCase,
    };
    pub use crate::compose::{ComposeConfig, ComposeProject};
    pub use crate::notice_generation::domain::{NoticeDocument, ProjectRecord};
    pub use crate::notice_generation::policies::LicenseCanonicalization;
    pub use crate::notice_generation::services::{LicenseResolver, NoticeRenderer, ProjectCatalog};
    pub use crate::ports::inbound::NoticePort;
    pub use crate::ports::outbound::{
        CommandOutput, CommandRunner, ContentHasher, GoInstaller, LicenseFinder, LicenseReader,
        NoticePublisher, ProgressReporter, ProjectFileReader, ServiceLauncher, ShellRunner,
        SourceFinder,
    };
    pub use crate::shared::error::{BakeError, ExitCode};
    pub use crate::shared::Result;
    pub use crate::toolchain::{ActivationScript, ShellKind};
}
