//! End-to-end tests that run the `coursefees` binary

#![cfg(target_os = "linux")]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run the binary with its config directory inside `home`
fn coursefees(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_coursefees"))
        .args(args)
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home)
        .output()
        .expect("Failed to run coursefees")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// The config file written by whichever build profile is under test
fn saved_config(home: &Path) -> String {
    let dir: PathBuf = home.join("coursefees");
    ["dconfig.toml", "config.toml"]
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
        .map(|path| fs::read_to_string(path).expect("Failed to read config"))
        .expect("config file should exist")
}

#[test]
fn quote_prints_discounted_total() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let output = coursefees(home.path(), &["quote", "first-aid", "cooking"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("R2137.50"));
}

#[test]
fn overrides_last_for_one_run() {
    let home = TempDir::new().expect("Failed to create temp dir");

    let set = coursefees(
        home.path(),
        &[
            "--currency",
            "$",
            "--config-reports-dir",
            "/tmp/elsewhere",
            "config",
            "set",
            "organization",
            "Acme",
        ],
    );
    assert!(set.status.success());

    let saved = saved_config(home.path());
    assert!(saved.contains("organization = \"Acme\""));
    assert!(!saved.contains("/tmp/elsewhere"));
    assert!(saved.contains("$COURSE_FEES"));

    let quote = coursefees(home.path(), &["quote", "first-aid", "cooking"]);
    assert!(stdout(&quote).contains("R2137.50"));
    assert!(stdout(&quote).contains("Acme"));
}

#[test]
fn failures_exit_non_zero() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let failing: [&[&str]; 5] = [
        &["quote"],
        &["quote", "sewing", "--format", "pdf"],
        &["route", "/nowhere"],
        &["course", "pottery"],
        &[
            "contact",
            "--name",
            "Thandi",
            "--email",
            "not-an-email",
            "--phone",
            "0821234567",
            "--message",
            "Hello",
        ],
    ];

    for args in failing {
        let output = coursefees(home.path(), args);
        assert_eq!(output.status.code(), Some(1), "{args:?}");
    }
}

#[test]
fn successes_exit_zero() {
    let home = TempDir::new().expect("Failed to create temp dir");
    for args in [
        &["route", "/about"][..],
        &["search", "landscape"][..],
        &["course", "sewing"][..],
    ] {
        let output = coursefees(home.path(), args);
        assert!(output.status.success(), "{args:?}");
    }
}
