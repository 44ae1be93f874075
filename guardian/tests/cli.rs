// End-to-end CLI tests against the built-in sample dashboards.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn guardian() -> Command {
    let mut cmd = Command::cargo_bin("guardian").expect("guardian binary");
    // Keep the tests hermetic: no accidental network sinks.
    for var in [
        "SLACK_WEBHOOK_URL",
        "JIRA_URL",
        "JIRA_EMAIL",
        "JIRA_API_TOKEN",
        "JIRA_PROJECT_KEY",
        "OPENAI_API_KEY",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_check_sample_fails_on_default_threshold() {
    // Marketing Performance scores 45, below the default threshold 70.
    guardian()
        .args(["check", "--sample"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Marketing Performance"))
        .stderr(predicate::str::contains("below threshold 70"));
}

#[test]
fn test_check_sample_passes_with_low_threshold() {
    guardian()
        .args(["check", "--sample", "--threshold", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("at or above threshold 40"));
}

#[test]
fn test_check_without_input_explains_usage() {
    let dir = tempdir().expect("tempdir");
    guardian()
        .current_dir(dir.path())
        .args(["check"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--sample"));
}

#[test]
fn test_gen_tests_sample_writes_files() -> Result<()> {
    let dir = tempdir()?;
    guardian()
        .current_dir(dir.path())
        .args(["gen-tests", "--sample", "-o", "generated"])
        .assert()
        .success();

    let marketing = dir.path().join("generated/marketing_performance_tests.rs");
    assert!(marketing.exists());
    let code = std::fs::read_to_string(marketing)?;
    assert!(code.contains("fn marketing_performance_sitevisits_no_drop()"));
    assert!(code.contains("assert!(last_value >= mean * 0.3);"));
    Ok(())
}

#[test]
fn test_run_sample_writes_artifacts() -> Result<()> {
    let dir = tempdir()?;
    guardian()
        .current_dir(dir.path())
        .args(["run", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data Quality Report"));

    assert!(dir.path().join("target/guardian/reports.json").exists());
    assert!(dir.path().join("target/guardian/run_results.json").exists());
    assert!(dir.path().join("generated_tests/sales_overview_tests.rs").exists());
    Ok(())
}

#[test]
fn test_run_respects_config_file() -> Result<()> {
    let dir = tempdir()?;
    std::fs::write(
        dir.path().join("guardian.yaml"),
        "name: sample-project\noutput_dir: out\ntests_dir: gen\n",
    )?;

    guardian()
        .current_dir(dir.path())
        .args(["run", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample-project"));

    assert!(dir.path().join("out/reports.json").exists());
    assert!(dir.path().join("gen/marketing_performance_tests.rs").exists());
    Ok(())
}
