//! Integration tests for the `prodplan` binary.
//!
//! Each test runs the compiled binary with `XDG_CONFIG_HOME` pointed at a
//! fresh temporary directory so no real config file is read or written.

use std::path::Path;
use std::process::{Command, Output};

// -----------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------

fn prodplan(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_prodplan"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("PRODPLAN_MONTHS")
        .env_remove("PRODPLAN_PERCENT")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run prodplan binary")
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "prodplan failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).expect("stdout should be UTF-8")
}

// -----------------------------------------------------------------------
// Tests: generate
// -----------------------------------------------------------------------

#[test]
fn generate_prints_csv_goals() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = prodplan(
        tmp.path(),
        &["generate", "10", "--months", "4", "--percent", "30", "--format", "csv"],
    );
    assert_eq!(stdout(&out), "month,goal\n1,13\n2,16\n3,20\n4,26\n");
}

#[test]
fn generate_uses_config_defaults() {
    let tmp = tempfile::TempDir::new().unwrap();
    stdout(&prodplan(tmp.path(), &["init", "--months", "3", "--percent", "100"]));

    let out = prodplan(tmp.path(), &["generate", "100", "--format", "csv"]);
    assert_eq!(stdout(&out), "month,goal\n1,200\n2,400\n3,800\n");
}

#[test]
fn generate_env_var_overrides_config() {
    let tmp = tempfile::TempDir::new().unwrap();
    stdout(&prodplan(tmp.path(), &["init", "--months", "3", "--percent", "100"]));

    let out = Command::new(env!("CARGO_BIN_EXE_prodplan"))
        .args(["generate", "20", "--format", "csv"])
        .env("XDG_CONFIG_HOME", tmp.path())
        .env("PRODPLAN_MONTHS", "2")
        .env("PRODPLAN_PERCENT", "0")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert_eq!(stdout(&out), "month,goal\n1,20\n2,20\n");
}

#[test]
fn generate_writes_output_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("plan.json");
    let out = prodplan(
        tmp.path(),
        &[
            "generate",
            "0",
            "--months",
            "4",
            "--percent",
            "50",
            "--format",
            "json",
            "--output",
            path.to_str().unwrap(),
        ],
    );
    assert_eq!(stdout(&out), "");

    let written = std::fs::read_to_string(&path).unwrap();
    let compact: String = written.split_whitespace().collect();
    assert!(
        compact.contains("\"goals\":[0,0,0,0]"),
        "unexpected output: {written}"
    );
}

#[test]
fn generate_rejects_oversized_month_count() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = prodplan(
        tmp.path(),
        &["generate", "10", "--months", "18446744073709551615", "--format", "csv"],
    );
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("maximum is 1200"), "unexpected stderr: {stderr}");
    assert!(!stderr.contains("panicked"), "unexpected stderr: {stderr}");
    assert!(out.stdout.is_empty());
}

#[test]
fn generate_rejects_oversized_month_count_from_env() {
    let tmp = tempfile::TempDir::new().unwrap();
    let out = Command::new(env!("CARGO_BIN_EXE_prodplan"))
        .args(["generate", "10"])
        .env("XDG_CONFIG_HOME", tmp.path())
        .env("PRODPLAN_MONTHS", "1000000000000")
        .env_remove("PRODPLAN_PERCENT")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("PRODPLAN_MONTHS"), "unexpected stderr: {stderr}");
}

#[test]
fn generate_flags_ignore_malformed_config() {
    let tmp = tempfile::TempDir::new().unwrap();
    let dir = tmp.path().join("prodplan");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "not = [valid").unwrap();

    let out = prodplan(
        tmp.path(),
        &["generate", "20", "--months", "2", "--percent", "0", "--format", "csv"],
    );
    assert_eq!(stdout(&out), "month,goal\n1,20\n2,20\n");
}

// -----------------------------------------------------------------------
// Tests: init
// -----------------------------------------------------------------------

#[test]
fn init_twice_without_force_fails() {
    let tmp = tempfile::TempDir::new().unwrap();
    stdout(&prodplan(tmp.path(), &["init"]));

    let second = prodplan(tmp.path(), &["init"]);
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("already exists"), "unexpected stderr: {stderr}");

    stdout(&prodplan(tmp.path(), &["init", "--force"]));
    assert!(tmp.path().join("prodplan/config.toml").is_file());
}

// -----------------------------------------------------------------------
// Tests: batch
// -----------------------------------------------------------------------

#[test]
fn batch_renders_example_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let example = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/examples/quarterly.toml");
    let out = prodplan(
        tmp.path(),
        &["batch", example.to_str().unwrap(), "--format", "csv"],
    );
    assert_eq!(
        stdout(&out),
        "plan,month,goal\n\
         assembly,1,13\nassembly,2,16\nassembly,3,20\n\
         packaging,1,200\npackaging,2,400\npackaging,3,800\n\
         legacy-line,1,380\nlegacy-line,2,361\nlegacy-line,3,342\n"
    );
}

#[test]
fn batch_rejects_invalid_file() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("plans.toml");
    std::fs::write(&path, "[batch]\nname = \"empty\"\n").unwrap();

    let out = prodplan(tmp.path(), &["batch", path.to_str().unwrap()]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("at least one plan"),
        "unexpected stderr: {stderr}"
    );
}

#[test]
fn batch_csv_quotes_plan_names() {
    let tmp = tempfile::TempDir::new().unwrap();
    let path = tmp.path().join("plans.toml");
    std::fs::write(
        &path,
        "[[plans]]\nname = \"line A, north\"\ncurrent = 10\nmonths = 2\npercent = 30\n",
    )
    .unwrap();

    let out = prodplan(
        tmp.path(),
        &["batch", path.to_str().unwrap(), "--format", "csv"],
    );
    let text = stdout(&out);
    assert_eq!(
        text,
        "plan,month,goal\n\"line A, north\",1,13\n\"line A, north\",2,16\n"
    );
}
