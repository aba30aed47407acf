/// End-to-end tests for the CLI
use std::path::PathBuf;

const SNAPSHOT: &str = "tests/fixtures/snapshot";

// Exit code tests for CLI
mod exit_code_tests {
    use super::SNAPSHOT;
    use assert_cmd::cargo::cargo_bin_cmd;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "--id", "p-alpha"])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("sw360-graph").arg("--help").assert().code(0);
    }

    /// Exit code 1: --fail-on-open with OPEN releases
    #[test]
    fn test_exit_code_open_releases() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "--id", "p-alpha", "--fail-on-open"])
            .assert()
            .code(1);
    }

    /// Exit code 0: --fail-on-open on a project without OPEN releases
    #[test]
    fn test_exit_code_fail_on_open_nothing_open() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "--id", "p-base", "--fail-on-open"])
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("sw360-graph")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: No project selected
    #[test]
    fn test_exit_code_missing_project() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT])
            .assert()
            .code(2);
    }

    /// Exit code 2: Name without version
    #[test]
    fn test_exit_code_name_without_version() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "-n", "Alpha"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("sw360-graph")
            .args(["--id", "p-alpha", "-f", "invalid_format"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent snapshot path
    #[test]
    fn test_exit_code_application_error_nonexistent_path() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", "/nonexistent/path/that/does/not/exist", "--id", "p-alpha"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - snapshot path is a file, not a directory
    #[test]
    fn test_exit_code_application_error_file_not_directory() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", "Cargo.toml", "--id", "p-alpha"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - unknown project id
    #[test]
    fn test_exit_code_application_error_unknown_project() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "--id", "p-missing"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Application error - no project with that name and version
    #[test]
    fn test_exit_code_application_error_unknown_version() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "-n", "Alpha", "-v", "9.9"])
            .assert()
            .code(3);
    }
}

mod report_tests {
    use super::SNAPSHOT;
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;
    use serde_json::Value;

    #[test]
    fn test_text_report() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "--id", "p-alpha", "--no-color"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Project name: Alpha, 1.0"))
            .stdout(predicate::str::contains("Project owner: owner@example.com"))
            .stdout(predicate::str::contains("Base, 2.0"))
            .stdout(predicate::str::contains("acl; 2.3.1; OPEN"))
            .stdout(predicate::str::contains("zlib; 1.3; MAINLINE"))
            .stdout(predicate::str::contains("No source provided").not());
    }

    #[test]
    fn test_text_report_check_sources() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "--id", "p-alpha", "--no-color", "--check-sources"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "curl; 8.4.0; OPEN; No source provided",
            ))
            .stdout(predicate::str::contains("acl; 2.3.1; OPEN; No source").not())
            .stdout(predicate::str::contains("pkg:generic/curl@8.4.0"));
    }

    #[test]
    fn test_progress_goes_to_stderr() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "--id", "p-alpha", "--no-color"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Loading project").not())
            .stderr(predicate::str::contains("Loading project p-alpha"));
    }

    #[test]
    fn test_json_report() {
        let output = cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "--id", "p-alpha", "-f", "json", "--check-sources"])
            .output()
            .unwrap();
        assert!(output.status.success());

        let report: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["name"], "Alpha");
        assert_eq!(report["releases"].as_array().unwrap().len(), 3);
        assert_eq!(report["releases"][0]["name"], "acl");
        assert_eq!(report["releases"][0]["mainlineState"], "OPEN");
        assert_eq!(report["releases"][0]["sourceAvailable"], true);
        assert_eq!(report["releases"][1]["sourceAvailable"], false);
        assert!(report["releases"][2].get("sourceAvailable").is_none());
    }

    #[test]
    fn test_find_by_name_and_version_case_insensitive() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "-n", "Alpha", "-v", "2.0-rc1", "--no-color"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Project name: Alpha, 2.0-RC1"))
            .stderr(predicate::str::contains("Alpha, 1.0 => ID = p-alpha"));
    }

    #[test]
    fn test_verbose_logs_debug_to_stderr() {
        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "--id", "p-base", "--verbose"])
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stderr(predicate::str::contains("fetching resource"));
    }
}

mod output_file_tests {
    use super::*;
    use assert_cmd::cargo::cargo_bin_cmd;
    use predicates::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_written_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path: PathBuf = temp_dir.path().join("status.txt");

        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "--id", "p-alpha", "-o"])
            .arg(&output_path)
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("acl; 2.3.1; OPEN"));
        // Files never get escape codes
        assert!(!content.contains('\u{1b}'));
    }

    #[test]
    fn test_output_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("missing").join("status.txt");

        cargo_bin_cmd!("sw360-graph")
            .args(["-s", SNAPSHOT, "--id", "p-alpha", "-o"])
            .arg(&output_path)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to write to file"));
    }
}
