//! Shared integration-test helpers for running the `docpage` binary.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

/// Environment variables the CLI reads; cleared so the host cannot leak in.
const DOCPAGE_ENV: &[&str] = &[
    "DOCPAGE_CONFIG",
    "DOCPAGE_BIND",
    "DOCPAGE_COLOR",
    "DOCPAGE_LOG_FORMAT",
    "DOCPAGE_LOG_LEVEL",
    "DOCPAGE_GITHUB_REPOSITORY",
    "DOCPAGE_FIXED_HEADER_OFFSET",
];

/// Returns the path to a test fixture.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Builds a `docpage` command with a clean environment, run from the
/// fixtures directory.
pub fn docpage_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_docpage"));
    cmd.args(args).current_dir(fixture_path(""));
    for var in DOCPAGE_ENV {
        cmd.env_remove(var);
    }
    cmd
}

/// Runs `docpage` to completion and captures its output.
#[allow(clippy::missing_panics_doc)]
pub fn run_docpage(args: &[&str]) -> Output {
    docpage_command(args)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run docpage")
}

/// Returns stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Returns stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
