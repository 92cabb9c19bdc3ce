/// Integration tests for the application layer
mod test_utilities;

use bake::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_utilities::mocks::*;

fn request(output: &Path) -> NoticeRequest {
    NoticeRequest::new(
        output.to_path_buf(),
        vec![PathBuf::from("/beats")],
        "Elastic Beats",
        "Elasticsearch BV",
        2014,
    )
    .with_end_year(2017)
}

const GOLDEN: &str = "Elastic Beats
Copyright 2014-2017

This product includes software developed by The Apache Software
Foundation (http://www.apache.org/).

==========================================================================
Third party libraries used by the Elastic Beats:
==========================================================================


--------------------------------------------------------------------
github.com/elastic/go-lumber
--------------------------------------------------------------------
Apache License
";

#[test]
fn test_generate_notice_golden() {
    let finder = MockLicenseFinder::new(&["/beats/vendor/github.com/elastic/go-lumber/LICENSE"]);
    let reader = MockLicenseReader::new().with_license(
        "/beats/vendor/github.com/elastic/go-lumber/LICENSE",
        "                                 Apache License\r\n                           Version 2.0, January 2004\r\n",
    );
    let publisher = MockNoticePublisher::new();
    let progress_reporter = MockProgressReporter::new();

    let use_case = NoticeUseCase::new(
        finder.clone(),
        reader,
        publisher.clone(),
        Sha256Hasher::new(),
        progress_reporter.clone(),
    );

    let output = PathBuf::from("/beats/NOTICE");
    let response = use_case.generate(&request(&output)).unwrap();

    assert_eq!(response.output, output);
    assert_eq!(response.license_files, 1);
    assert_eq!(response.project_count, 1);
    assert_eq!(publisher.content(&output).as_deref(), Some(GOLDEN));
    assert_eq!(finder.searched(), vec![vec![PathBuf::from("/beats")]]);
    assert!(progress_reporter
        .messages_with_prefix("Completed: ")
        .iter()
        .any(|m| m.contains("1 project(s)")));
}

#[test]
fn test_generate_dedups_and_sorts_case_insensitively() {
    let finder = MockLicenseFinder::new(&[
        "/beats/vendor/github.com/Zeta/LICENSE",
        "/beats/vendor/github.com/alpha/LICENSE",
        "/beats/vendor/github.com/Beta/LICENSE",
        "/beats/metricbeat/vendor/github.com/alpha/LICENSE",
    ]);
    let reader = MockLicenseReader::new()
        .with_license("/beats/vendor/github.com/Zeta/LICENSE", "zeta license\n")
        .with_license("/beats/vendor/github.com/alpha/LICENSE", "first alpha\n")
        .with_license("/beats/vendor/github.com/Beta/LICENSE", "beta license\n")
        .with_license(
            "/beats/metricbeat/vendor/github.com/alpha/LICENSE",
            "second alpha\n",
        );
    let publisher = MockNoticePublisher::new();

    let use_case = NoticeUseCase::new(
        finder,
        reader,
        publisher.clone(),
        Sha256Hasher::new(),
        MockProgressReporter::new(),
    );
    let output = PathBuf::from("/beats/NOTICE");
    let response = use_case.generate(&request(&output)).unwrap();
    assert_eq!(response.project_count, 3);

    let content = publisher.content(&output).unwrap();
    let names: Vec<&str> = content
        .lines()
        .filter(|line| line.starts_with("github.com/"))
        .collect();
    assert_eq!(
        names,
        vec!["github.com/alpha", "github.com/Beta", "github.com/Zeta"]
    );
    assert!(content.contains("first alpha"));
    assert!(!content.contains("second alpha"));
}

#[test]
fn test_scan_failure_publishes_nothing() {
    let publisher = MockNoticePublisher::new();
    let use_case = NoticeUseCase::new(
        MockLicenseFinder::with_failure(),
        MockLicenseReader::new(),
        publisher.clone(),
        Sha256Hasher::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .generate(&request(Path::new("/beats/NOTICE")))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BakeError>(),
        Some(BakeError::Scan { .. })
    ));
    assert!(publisher.published.lock().unwrap().is_empty());
}

#[test]
fn test_unreadable_license_aborts_and_reports() {
    let progress_reporter = MockProgressReporter::new();
    let publisher = MockNoticePublisher::new();
    let use_case = NoticeUseCase::new(
        MockLicenseFinder::new(&[
            "/beats/vendor/github.com/a/LICENSE",
            "/beats/vendor/github.com/b/LICENSE",
        ]),
        MockLicenseReader::new().with_license("/beats/vendor/github.com/a/LICENSE", "MIT\n"),
        publisher.clone(),
        Sha256Hasher::new(),
        progress_reporter.clone(),
    );

    let err = use_case
        .generate(&request(Path::new("/beats/NOTICE")))
        .unwrap_err();
    match err.downcast_ref::<BakeError>() {
        Some(BakeError::LicenseRead { path, .. }) => {
            assert_eq!(path, Path::new("/beats/vendor/github.com/b/LICENSE"))
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(progress_reporter.messages_with_prefix("Error: ").len(), 1);
    assert!(publisher.published.lock().unwrap().is_empty());
}

#[test]
fn test_publish_failure_propagates() {
    let use_case = NoticeUseCase::new(
        MockLicenseFinder::new(&[]),
        MockLicenseReader::new(),
        MockNoticePublisher::with_failure(),
        Sha256Hasher::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .generate(&request(Path::new("/beats/NOTICE")))
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<BakeError>(),
        Some(BakeError::Publish { .. })
    ));
}

/// Check against real files: generate, check, mutate, check again
#[test]
fn test_check_round_trip_on_disk() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("NOTICE");
    let use_case = NoticeUseCase::new(
        MockLicenseFinder::new(&["/beats/vendor/github.com/a/LICENSE"]),
        MockLicenseReader::new().with_license("/beats/vendor/github.com/a/LICENSE", "MIT\n"),
        AtomicFileWriter::new(),
        Sha256Hasher::new(),
        MockProgressReporter::new(),
    );

    use_case.generate(&request(&output)).unwrap();
    let first = fs::read(&output).unwrap();

    let response = use_case.check(&request(&output)).unwrap();
    assert!(response.digest.is_some());
    assert_eq!(fs::read(&output).unwrap(), first);

    fs::write(&output, b"tampered\n").unwrap();
    let err = use_case.check(&request(&output)).unwrap_err();
    assert_eq!(ExitCode::for_error(&err), ExitCode::CheckFailed);
    assert_eq!(fs::read(&output).unwrap(), b"tampered\n");
}

#[test]
fn test_full_pipeline_with_filesystem_adapters() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    for (rel, text) in [
        ("vendor/github.com/pkg/errors/LICENSE", "BSD 2-Clause\r\n"),
        ("vendor/github.com/elastic/go-lumber/LICENSE", "Apache License\nVersion 2.0\n"),
        ("libbeat/vendor/github.com/pkg/errors/LICENSE", "another copy\n"),
        (".git/vendor/github.com/ignored/LICENSE", "ignored\n"),
        ("LICENSE", "top-level license\n"),
    ] {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, text).unwrap();
    }
    let output = root.join("NOTICE");
    let request = NoticeRequest::new(
        output.clone(),
        vec![root.to_path_buf()],
        "Elastic Beats",
        "Elasticsearch BV",
        2014,
    )
    .with_end_year(2017);

    let use_case = NoticeUseCase::new(
        WalkDirFinder::new(),
        FileSystemReader::new(),
        AtomicFileWriter::new(),
        Sha256Hasher::new(),
        MockProgressReporter::new(),
    );
    let response = use_case.generate(&request).unwrap();
    assert_eq!(response.license_files, 3);
    assert_eq!(response.project_count, 2);

    let content = fs::read_to_string(&output).unwrap();
    let lumber = content.find("github.com/elastic/go-lumber\n").unwrap();
    let errors = content.find("github.com/pkg/errors\n").unwrap();
    assert!(lumber < errors);
    // libbeat/ sorts before vendor/, so its copy is discovered first and wins.
    assert!(content.contains("another copy\n"));
    assert!(!content.contains("BSD 2-Clause"));
    assert!(!content.contains("\r\n"));
    assert!(!content.contains("ignored"));
    assert!(!content.contains("top-level license"));

    use_case.check(&request).unwrap();
}

#[test]
fn test_source_checks_with_mock_runner() {
    struct FixedSources;

    impl SourceFinder for FixedSources {
        fn go_files(&self, _root: &Path) -> Result<Vec<PathBuf>> {
            Ok(vec![PathBuf::from("./main.go"), PathBuf::from("./beat/beat.go")])
        }
    }

    let runner = MockCommandRunner::new()
        .with_output("gofmt -s -l main.go beat/beat.go", "beat/beat.go\n")
        .with_output("go list ./...", "github.com/elastic/beats\ngithub.com/elastic/beats/vendor/x\n")
        .with_output("go vet github.com/elastic/beats", "");
    let source_checks = SourceChecksUseCase::new(FixedSources, runner.clone());

    let notice = NoticeUseCase::new(
        MockLicenseFinder::new(&[]),
        MockLicenseReader::new(),
        MockNoticePublisher::new(),
        Sha256Hasher::new(),
        MockProgressReporter::new(),
    );
    let notice_request = request(Path::new("/nonexistent/NOTICE"));

    let report = RunChecksUseCase::new(&source_checks, &notice, &notice_request, PathBuf::from("."))
        .execute(&[]);

    assert_eq!(report.outcomes.len(), 3);
    assert_eq!(
        report.outcomes[0].status,
        CheckStatus::Failed {
            findings: vec!["beat/beat.go".to_string()],
            message: "some files need to be formatted with gofmt -s".to_string(),
        }
    );
    assert_eq!(report.outcomes[1].status, CheckStatus::Passed);
    // The published NOTICE does not exist, which is drift rather than an error.
    assert!(matches!(
        report.outcomes[2].status,
        CheckStatus::Failed { .. }
    ));
    assert_eq!(report.exit_code(), ExitCode::CheckFailed);
    assert_eq!(
        runner.calls(),
        vec![
            "gofmt -s -l main.go beat/beat.go",
            "go list ./...",
            "go vet github.com/elastic/beats",
        ]
    );
}

#[test]
fn test_service_environment_with_mock_runner() {
    struct NoopLauncher;

    impl ServiceLauncher for NoopLauncher {
        type Handle = ();

        fn launch(&self, _program: &str, _args: &[String], _log: Option<&Path>) -> Result<()> {
            Ok(())
        }
    }

    struct NoopShell;

    impl ShellRunner for NoopShell {
        fn run_shell(
            &self,
            _script: Option<&Path>,
            _env: &std::collections::BTreeMap<String, String>,
        ) -> Result<()> {
            Ok(())
        }
    }

    let runner = MockCommandRunner::new()
        .with_output(
            "docker-compose -f docker-compose.yml config",
            "services:\n  kafka-broker:\n    ports:\n      - \"9092\"\n",
        )
        .with_output(
            "docker-compose -f docker-compose.yml port kafka-broker 9092",
            "0.0.0.0:32770\n",
        );
    let use_case = ServiceEnvironmentUseCase::new(runner, NoopLauncher, NoopShell);
    let project = ComposeProject::new(None, Vec::new());

    let config = use_case.load_config(&project).unwrap();
    let env = use_case.service_environment(&project, &config);
    assert_eq!(env["KAFKA_BROKER_HOST"], "127.0.0.1");
    assert_eq!(env["KAFKA_BROKER_PORT_9092_TCP_PORT"], "32770");
}
