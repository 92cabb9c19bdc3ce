/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from a `bake.config.yml` on disk through
/// CLI invocation to the published NOTICE, using `assert_cmd` and `tempfile`
/// for isolated project roots.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Create a project root with `.git` and one vendored license.
fn create_test_project(dir: &Path) {
    fs::create_dir(dir.join(".git")).unwrap();
    let license = dir.join("vendor/github.com/org/pkg/LICENSE");
    fs::create_dir_all(license.parent().unwrap()).unwrap();
    fs::write(license, "MIT License\n").unwrap();
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn notice_header(dir: &Path) -> String {
    let notice = fs::read_to_string(dir.join("NOTICE")).unwrap();
    notice.lines().take(2).collect::<Vec<_>>().join("\n")
}

// ============================================================================
// Config discovery and merging
// ============================================================================

mod config_discovery {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_notice_section() {
        let temp_dir = TempDir::new().unwrap();
        create_test_project(temp_dir.path());
        write_config(
            &temp_dir.path().join("bake.config.yml"),
            "notice:\n  beat: Elastic Metricbeat\n  year: 2015\n",
        );

        cargo_bin_cmd!("bake")
            .current_dir(temp_dir.path())
            .arg("notice")
            .assert()
            .code(0);

        assert!(notice_header(temp_dir.path()).starts_with("Elastic Metricbeat\nCopyright 2015-"));
    }

    #[test]
    fn test_no_config_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        create_test_project(temp_dir.path());

        cargo_bin_cmd!("bake")
            .current_dir(temp_dir.path())
            .arg("notice")
            .assert()
            .code(0);

        assert!(notice_header(temp_dir.path()).starts_with("Elastic Beats\nCopyright 2014-"));
    }

    #[test]
    fn test_cli_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        create_test_project(temp_dir.path());
        write_config(
            &temp_dir.path().join("bake.config.yml"),
            "notice:\n  beat: Elastic Metricbeat\n  year: 2015\n",
        );

        cargo_bin_cmd!("bake")
            .current_dir(temp_dir.path())
            .args(["notice", "-b", "Elastic Heartbeat"])
            .assert()
            .code(0);

        assert!(notice_header(temp_dir.path()).starts_with("Elastic Heartbeat\nCopyright 2015-"));
    }

    #[test]
    fn test_config_output_is_relative_to_project_root() {
        let temp_dir = TempDir::new().unwrap();
        create_test_project(temp_dir.path());
        fs::create_dir(temp_dir.path().join("docs")).unwrap();
        write_config(
            &temp_dir.path().join("bake.config.yml"),
            "notice:\n  output: docs/NOTICE\n",
        );

        cargo_bin_cmd!("bake")
            .current_dir(temp_dir.path().join("docs"))
            .arg("notice")
            .assert()
            .code(0);

        assert!(temp_dir.path().join("docs/NOTICE").exists());
    }

    #[test]
    fn test_explicit_config_path_loads_successfully() {
        let temp_dir = TempDir::new().unwrap();
        create_test_project(temp_dir.path());
        let config_path = temp_dir.path().join("custom.yml");
        write_config(&config_path, "notice:\n  copyright: Elastic NV\n  beat: Custom Beat\n");

        cargo_bin_cmd!("bake")
            .current_dir(temp_dir.path())
            .args(["notice", "--config", config_path.to_str().unwrap()])
            .assert()
            .code(0);

        assert!(notice_header(temp_dir.path()).starts_with("Custom Beat\n"));
    }

    #[test]
    fn test_config_default_checks() {
        let temp_dir = TempDir::new().unwrap();
        create_test_project(temp_dir.path());
        write_config(
            &temp_dir.path().join("bake.config.yml"),
            "checks:\n  - notice\n",
        );

        // Only the notice check runs, and no NOTICE exists yet.
        cargo_bin_cmd!("bake")
            .current_dir(temp_dir.path())
            .arg("check")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("✘ notice"))
            .stderr(predicate::str::contains("✘ fmt").not());
    }

    #[test]
    fn test_unknown_field_warns_but_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        create_test_project(temp_dir.path());
        write_config(
            &temp_dir.path().join("bake.config.yml"),
            "notice:\n  beatname: typo\nextra: 1\n",
        );

        cargo_bin_cmd!("bake")
            .current_dir(temp_dir.path())
            .arg("notice")
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Unknown config field 'notice.beatname'"))
            .stderr(predicate::str::contains("Unknown config field 'extra'"));
    }
}

// ============================================================================
// Config errors
// ============================================================================

mod config_errors {
    use super::*;

    #[test]
    fn test_invalid_yaml_syntax_error() {
        let temp_dir = TempDir::new().unwrap();
        create_test_project(temp_dir.path());
        write_config(
            &temp_dir.path().join("bake.config.yml"),
            "notice: [unclosed\n",
        );

        cargo_bin_cmd!("bake")
            .current_dir(temp_dir.path())
            .arg("notice")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_non_positive_year_rejected() {
        let temp_dir = TempDir::new().unwrap();
        create_test_project(temp_dir.path());
        write_config(&temp_dir.path().join("bake.config.yml"), "notice:\n  year: 0\n");

        cargo_bin_cmd!("bake")
            .current_dir(temp_dir.path())
            .arg("notice")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("notice.year"));

        assert!(!temp_dir.path().join("NOTICE").exists());
    }

    #[test]
    fn test_unknown_check_rejected() {
        let temp_dir = TempDir::new().unwrap();
        create_test_project(temp_dir.path());
        write_config(
            &temp_dir.path().join("bake.config.yml"),
            "checks:\n  - lint\n",
        );

        cargo_bin_cmd!("bake")
            .current_dir(temp_dir.path())
            .arg("check")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("lint"));
    }

    #[test]
    fn test_explicit_config_not_found_error() {
        let temp_dir = TempDir::new().unwrap();
        create_test_project(temp_dir.path());

        cargo_bin_cmd!("bake")
            .current_dir(temp_dir.path())
            .args(["notice", "--config", "missing.yml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}
