#![allow(dead_code)]
use assert_cmd::{cargo_bin_cmd, Command};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wl() -> Command {
    cargo_bin_cmd!("worklogger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a unique, empty remote-root directory for sync tests
pub fn setup_remote_root(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_worklogger_remote", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create remote root");
    path.to_string_lossy().to_string()
}

/// Initialize DB and register the project most tests book against
pub fn init_db_with_project(db_path: &str) {
    wl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    wl().args([
        "--db", db_path, "project", "add", "--id", "P100", "--sub", "01", "--title", "Platform",
        "--category", "Development",
    ])
    .assert()
    .success();
}

/// Shorthand for adding a work entry
pub fn add_work(db_path: &str, date: &str, hours: &str) {
    wl().args([
        "--db", db_path, "add", date, "--type", "work", "--project", "P100-01", "--hours", hours,
    ])
    .assert()
    .success();
}
