#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn drt() -> Command {
    cargo_bin_cmd!("dutyrota")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_dutyrota.sqlite", name));
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

/// Initialize the DB and add `n` workers via the CLI
pub fn init_db_with_roster(db_path: &str, n: usize) {
    drt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    for i in 1..=n {
        let name = format!("Worker {}", i);
        drt()
            .args(["--db", db_path, "--test", "worker", "add", &name])
            .assert()
            .success();
    }
}
