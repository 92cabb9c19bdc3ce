mod adapters;
mod application;
mod cli;
mod compose;
mod config;
mod notice_generation;
mod ports;
mod shared;
mod toolchain;

use adapters::outbound::console::StderrProgressReporter;
use adapters::outbound::filesystem::{
    AtomicFileWriter, FileSystemReader, Sha256Hasher, WalkDirFinder,
};
use adapters::outbound::process::{BashShell, GvmInstaller, ProcessLauncher, SystemCommandRunner};
use application::dto::{CheckKind, CheckReport, CheckStatus};
use application::use_cases::{
    GoToolchainUseCase, NoticeUseCase, RunChecksUseCase, ServiceEnvironmentUseCase,
    SourceChecksUseCase,
};
use cli::{Args, Command};
use config::{ConfigFile, DockerOverrides, NoticeOverrides};
use owo_colors::{OwoColorize, Stream};
use ports::inbound::NoticePort;
use shared::error::ExitCode;
use shared::project_root::find_git_project_root;
use shared::Result;
use std::path::{Path, PathBuf};
use std::{env, process};
use toolchain::ShellKind;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments; clap exits with code 2 on its own errors
    let args = Args::parse_args();
    init_tracing(args.debug);

    let exit_code = match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            ExitCode::for_error(&e)
        }
    };
    process::exit(exit_code.as_i32());
}

/// Logs go to stderr; silent unless `--debug` or `RUST_LOG` asks for them
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<ExitCode> {
    let cwd = env::current_dir()?;
    tracing::debug!(command = ?args.command, cwd = %cwd.display(), "starting");

    match args.command {
        Command::Notice {
            beat,
            copyright,
            year,
            output,
            dirs,
        } => {
            let root = find_git_project_root(&cwd)?;
            let config = load_config(args.config.as_deref(), Some(&root))?;
            let request = config.notice_request(
                &root,
                NoticeOverrides {
                    beat,
                    copyright,
                    year,
                    output,
                    dirs,
                },
            );
            notice_use_case(StderrProgressReporter::new()).generate(&request)?;
            Ok(ExitCode::Success)
        }
        Command::Check { checks } => {
            let root = find_git_project_root(&cwd).ok();
            let config = load_config(args.config.as_deref(), root.as_deref())?;
            let mut checks: Vec<CheckKind> = checks.into_iter().map(CheckKind::from).collect();
            if checks.is_empty() {
                checks = config.default_checks();
            }
            run_checks(&cwd, root, &config, &checks)
        }
        Command::Fmt => {
            let use_case = SourceChecksUseCase::new(WalkDirFinder::new(), SystemCommandRunner::new());
            for file in use_case.format(Path::new("."))? {
                println!("{}", file);
            }
            Ok(ExitCode::Success)
        }
        Command::Docker {
            project,
            files,
            log,
            script,
        } => {
            let root = find_git_project_root(&cwd).ok();
            let config = load_config(args.config.as_deref(), root.as_deref())?;
            let request = config.docker_request(
                root.as_deref().unwrap_or(&cwd),
                DockerOverrides {
                    project,
                    files,
                    log,
                    script,
                },
            );
            let use_case = ServiceEnvironmentUseCase::new(
                SystemCommandRunner::new(),
                ProcessLauncher::new(),
                BashShell::new(),
            );
            use_case.execute(&request)?;
            Ok(ExitCode::Success)
        }
        // The Go version is the only information reported, with or without --go-version
        Command::Info { .. } => {
            let root = find_git_project_root(&cwd)?;
            println!("{}", toolchain_use_case(root).project_go_version()?);
            Ok(ExitCode::Success)
        }
        Command::Gvm {
            project_go,
            powershell,
            version,
        } => {
            let root = if project_go {
                find_git_project_root(&cwd)?
            } else {
                cwd
            };
            let script = toolchain_use_case(root).activation_script(
                version.as_deref(),
                project_go,
                ShellKind::detect(powershell),
                &env::var("PATH").unwrap_or_default(),
            )?;
            print!("{}", script);
            Ok(ExitCode::Success)
        }
    }
}

/// An explicit `--config` must exist; otherwise the project root is searched
fn load_config(explicit: Option<&Path>, project_root: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit {
        return config::load_config_from_path(path);
    }
    match project_root {
        Some(root) => Ok(config::discover_config(root)?.unwrap_or_default()),
        None => Ok(ConfigFile::default()),
    }
}

fn notice_use_case(
    progress_reporter: StderrProgressReporter,
) -> NoticeUseCase<WalkDirFinder, FileSystemReader, AtomicFileWriter, Sha256Hasher, StderrProgressReporter>
{
    NoticeUseCase::new(
        WalkDirFinder::new(),
        FileSystemReader::new(),
        AtomicFileWriter::new(),
        Sha256Hasher::new(),
        progress_reporter,
    )
}

fn toolchain_use_case(
    project_root: PathBuf,
) -> GoToolchainUseCase<FileSystemReader, GvmInstaller<SystemCommandRunner>> {
    GoToolchainUseCase::new(
        FileSystemReader::new(),
        GvmInstaller::new(SystemCommandRunner::new()),
        project_root,
    )
}

fn run_checks(
    cwd: &Path,
    root: Option<PathBuf>,
    config: &ConfigFile,
    checks: &[CheckKind],
) -> Result<ExitCode> {
    let wants_notice = checks.is_empty() || checks.contains(&CheckKind::Notice);
    let root = match root {
        Some(root) => root,
        None if wants_notice => find_git_project_root(cwd)?,
        None => cwd.to_path_buf(),
    };

    let notice_request = config.notice_request(&root, NoticeOverrides::default());
    let notice = notice_use_case(StderrProgressReporter::quiet());
    let source_checks = SourceChecksUseCase::new(WalkDirFinder::new(), SystemCommandRunner::new());

    let report = RunChecksUseCase::new(&source_checks, &notice, &notice_request, PathBuf::from("."))
        .execute(checks);
    print_check_report(&report);
    Ok(report.exit_code())
}

/// Findings go to stdout, one per line; the verdict of each check to stderr
fn print_check_report(report: &CheckReport) {
    for outcome in &report.outcomes {
        match &outcome.status {
            CheckStatus::Passed => eprintln!(
                "{} {}",
                "✔".if_supports_color(Stream::Stderr, |t| t.green()),
                outcome.kind
            ),
            CheckStatus::Failed { findings, message } => {
                for finding in findings {
                    println!("{}", finding);
                }
                eprintln!(
                    "{} {}: {}",
                    "✘".if_supports_color(Stream::Stderr, |t| t.red()),
                    outcome.kind,
                    message
                );
            }
            CheckStatus::Errored(message) => eprintln!(
                "{} {}: {}",
                "!".if_supports_color(Stream::Stderr, |t| t.yellow()),
                outcome.kind,
                message
            ),
        }
    }

    if let Some(failure) = report.failure() {
        eprintln!("\n❌ {}", failure);
    }
}
