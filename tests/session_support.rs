use assert_cmd::Command;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Runs the `ftot_tools` binary against a throwaway application home.
pub struct SessionHarness {
    home: TempDir,
}

impl SessionHarness {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn with_config(config: Value) -> Self {
        let harness = Self::new();
        harness.write_config(&config.to_string());
        harness
    }

    pub fn home(&self) -> &Path {
        self.home.path()
    }

    pub fn write_config(&self, raw: &str) {
        std::fs::write(self.home().join("config.json"), raw).expect("write config");
    }

    pub fn run(&self, input: &str) -> CliOutput {
        let mut cmd = Command::cargo_bin("ftot_tools").expect("binary exists");
        cmd.env("FTOT_TOOLS_HOME", self.home())
            .env_remove("RUST_LOG")
            .write_stdin(input.to_string());
        let output = cmd.output().expect("run ftot_tools");
        CliOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            success: output.status.success(),
        }
    }
}
