//! Test environment builder for isolated Deckhand testing.
//!
//! Provides `TestEnv` - a temp working directory with its own config home,
//! plus helpers to run the CLI with a scrubbed environment.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Result of running a Deckhand CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse every stdout line as JSON
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("not JSON ({}): {}", e, l)))
            .collect()
    }
}

/// Variables that would leak the developer's setup into a test run
const SCRUBBED: &[&str] = &[
    "DECKHAND_MARATHON_URL",
    "DECKHAND_MARATHON_USER",
    "DECKHAND_MARATHON_PASSWORD",
    "DECKHAND_WAIT_TIMEOUT_SECS",
    "DECKHAND_COLOR",
    "RUST_LOG",
    "CI",
    "GITHUB_ACTIONS",
];

pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        Self { dir }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Write `content` to `relative` and return its path
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Write a user config picked up through `XDG_CONFIG_HOME`
    pub fn write_user_config(&self, content: &str) -> PathBuf {
        self.write("config/deckhand/config.toml", content)
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_deckhand"));
        cmd.current_dir(self.dir.path())
            .args(args)
            .env("XDG_CONFIG_HOME", self.path("config"))
            .env("NO_COLOR", "1");
        for key in SCRUBBED {
            cmd.env_remove(key);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute deckhand");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
