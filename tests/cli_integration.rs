use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

const SAMPLE_LOG: &str = "cookie,timestamp
AtY0laUfhglK3lC7,2018-12-09T14:19:00+00:00
SAZuXPGUrfbcn5UA,2018-12-09T10:13:00+00:00
5UAVanZf6UtGyKVS,2018-12-09T07:25:00+00:00
AtY0laUfhglK3lC7,2018-12-09T06:19:00+00:00
SAZuXPGUrfbcn5UA,2018-12-08T22:03:00+00:00
4sMM2LxV07bPJzwf,2018-12-08T21:30:00+00:00
fbcn5UAVanZf6UtG,2018-12-08T09:30:00+00:00
4sMM2LxV07bPJzwf,2018-12-07T23:30:00+00:00
";

struct Output {
    code: Option<i32>,
    stdout: String,
    stderr: String,
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test file");
    path
}

fn run_cookie(args: &[&str], config: &Path) -> Output {
    let bin = std::env::var("CARGO_BIN_EXE_most-active-cookie").unwrap_or_else(|_| {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("target");
        path.push("debug");
        if cfg!(windows) {
            path.push("most-active-cookie.exe");
        } else {
            path.push("most-active-cookie");
        }
        path.to_string_lossy().into_owned()
    });
    let output = Command::new(bin)
        .args(args)
        .env("MOST_ACTIVE_COOKIE_CONFIG", config)
        .output()
        .expect("run most-active-cookie");
    Output {
        code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}

/// Run with a config path that doesn't exist, so user config never leaks in
fn run_isolated(dir: &TempDir, args: &[&str]) -> Output {
    run_cookie(args, &dir.path().join("no-config.toml"))
}

#[test]
fn prints_single_most_active_cookie() {
    let dir = TempDir::new().unwrap();
    let log = write_file(dir.path(), "cookie_log.csv", SAMPLE_LOG);

    let out = run_isolated(&dir, &["-f", log.to_str().unwrap(), "-d", "2018-12-09"]);
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert_eq!(out.stdout, "AtY0laUfhglK3lC7\n");
    assert_eq!(out.stderr, "");
}

#[test]
fn prints_all_tied_cookies_sorted() {
    let dir = TempDir::new().unwrap();
    let log = write_file(dir.path(), "cookie_log.csv", SAMPLE_LOG);

    let out = run_isolated(&dir, &["--filename", log.to_str().unwrap(), "--date", "2018-12-08"]);
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert_eq!(
        out.stdout,
        "4sMM2LxV07bPJzwf\nSAZuXPGUrfbcn5UA\nfbcn5UAVanZf6UtG\n"
    );
}

#[test]
fn quiet_success_when_no_activity() {
    let dir = TempDir::new().unwrap();
    let log = write_file(dir.path(), "cookie_log.csv", SAMPLE_LOG);

    let out = run_isolated(&dir, &["-f", log.to_str().unwrap(), "-d", "2019-01-01"]);
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "");
}

#[test]
fn malformed_lines_warn_but_do_not_fail() {
    let dir = TempDir::new().unwrap();
    let log = write_file(
        dir.path(),
        "cookie_log.csv",
        "cookie,timestamp
b,2018-12-09T12:00:00+00:00
lonely
,2018-12-09T11:00:00+00:00
a,garbage
b,2018-12-09T10:00:00+00:00
a,2018-12-09T09:00:00+00:00
",
    );

    let out = run_isolated(&dir, &["-f", log.to_str().unwrap(), "-d", "2018-12-09"]);
    assert_eq!(out.code, Some(0), "stderr: {}", out.stderr);
    assert_eq!(out.stdout, "b\n");
    assert!(out.stderr.contains("Skipping malformed line 3"));
    assert!(out.stderr.contains("Skipping empty values on line 4"));
    assert!(out.stderr.contains("invalid timestamp: garbage"));
}

#[test]
fn unexpected_header_is_a_warning() {
    let dir = TempDir::new().unwrap();
    let log = write_file(
        dir.path(),
        "cookie_log.csv",
        "id,when\nx,2018-12-09T12:00:00+00:00\n",
    );

    let out = run_isolated(&dir, &["-f", log.to_str().unwrap(), "-d", "2018-12-09"]);
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "x\n");
    assert!(out.stderr.contains("Unexpected header"));

    let out = run_isolated(
        &dir,
        &["-f", log.to_str().unwrap(), "-d", "2018-12-09", "--header", "id,when"],
    );
    assert_eq!(out.stdout, "x\n");
    assert_eq!(out.stderr, "");
}

#[test]
fn missing_file_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nonexistent.csv");

    let out = run_isolated(&dir, &["-f", missing.to_str().unwrap(), "-d", "2018-12-09"]);
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("File not found"));
    assert_eq!(out.stdout, "");
}

#[test]
fn invalid_date_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    let log = write_file(dir.path(), "cookie_log.csv", SAMPLE_LOG);

    let out = run_isolated(&dir, &["-f", log.to_str().unwrap(), "-d", "invalid-date"]);
    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Invalid date format"));
}

#[test]
fn headerless_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let log = write_file(dir.path(), "cookie_log.csv", "\n\n");

    let out = run_isolated(&dir, &["-f", log.to_str().unwrap(), "-d", "2018-12-09"]);
    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("Error: Empty file"));
}

#[test]
fn verify_order_rejects_unsorted_log() {
    let dir = TempDir::new().unwrap();
    let log = write_file(
        dir.path(),
        "cookie_log.csv",
        "cookie,timestamp
a,2018-12-09T08:00:00+00:00
b,2018-12-09T09:00:00+00:00
",
    );

    let out = run_isolated(&dir, &["-f", log.to_str().unwrap(), "-d", "2018-12-09"]);
    assert_eq!(out.code, Some(0));

    let out = run_isolated(
        &dir,
        &["-f", log.to_str().unwrap(), "-d", "2018-12-09", "--verify-order"],
    );
    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("not sorted"));
    assert_eq!(out.stdout, "");
}

#[test]
fn config_file_enables_verbose_output() {
    let dir = TempDir::new().unwrap();
    let log = write_file(dir.path(), "cookie_log.csv", SAMPLE_LOG);
    let config = write_file(dir.path(), "config.toml", "verbose = true\n");

    let out = run_cookie(&["-f", log.to_str().unwrap(), "-d", "2018-12-09"], &config);
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "AtY0laUfhglK3lC7\n");
    assert!(out.stderr.contains("Loaded config from"));
    assert!(out.stderr.contains("stopping"));
}

#[test]
fn broken_config_is_ignored_with_warning() {
    let dir = TempDir::new().unwrap();
    let log = write_file(dir.path(), "cookie_log.csv", SAMPLE_LOG);
    let config = write_file(dir.path(), "config.toml", "verbose = [\n");

    let out = run_cookie(&["-f", log.to_str().unwrap(), "-d", "2018-12-09"], &config);
    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "AtY0laUfhglK3lC7\n");
    assert!(out.stderr.contains("Failed to parse"));
}
