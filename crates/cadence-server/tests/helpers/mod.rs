use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness for running CLI commands in an isolated directory
pub struct CliTestHarness {
    temp_dir: TempDir,
    db_path: PathBuf,
}

impl CliTestHarness {
    /// Create a new test harness with a temporary working directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");

        Self { temp_dir, db_path }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");

        // Keep config files and the database inside the temp directory
        cmd.current_dir(self.temp_dir.path());
        cmd.env("TODO_DBFILE", &self.db_path);
        cmd.env_remove("CADENCE_CONFIG");
        cmd.env_remove("TODO_PORT");

        cmd
    }

    /// Database path handed to the binary through `TODO_DBFILE`
    pub fn db_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }
}

/// Arguments for `next-date` with a fixed reference date
pub fn next_date_args<'a>(now: &'a str, date: &'a str, repeat: &'a str) -> Vec<&'a str> {
    vec!["next-date", "--now", now, "--date", date, "--repeat", repeat]
}
