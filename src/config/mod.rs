use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::errors::ConfigError;
use crate::utils::paths;

/// Label of the entry appended when a configuration lists no exit.
pub const EXIT_LABEL: &str = "exit";

/// What the menu does when a tool fails or panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Print the failure and show the menu again.
    #[default]
    Report,
    /// End the session and surface the failure to the caller.
    Abort,
}

/// One configured menu binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryConfig {
    /// Runs an external program; `command` uses shell word splitting.
    Command {
        label: String,
        command: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        working_dir: Option<PathBuf>,
        #[serde(default = "default_true")]
        pause: bool,
    },
    /// A tool that has no implementation yet.
    Placeholder {
        label: String,
        #[serde(default = "default_true")]
        pause: bool,
    },
    Exit {
        label: String,
    },
}

impl EntryConfig {
    pub fn command(label: &str, command: &str, pause: bool) -> Self {
        EntryConfig::Command {
            label: label.into(),
            command: command.into(),
            working_dir: None,
            pause,
        }
    }

    pub fn placeholder(label: &str) -> Self {
        EntryConfig::Placeholder {
            label: label.into(),
            pause: true,
        }
    }

    pub fn exit(label: &str) -> Self {
        EntryConfig::Exit {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EntryConfig::Command { label, .. }
            | EntryConfig::Placeholder { label, .. }
            | EntryConfig::Exit { label } => label,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, EntryConfig::Exit { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_true")]
    pub clear_screen: bool,
    #[serde(default)]
    pub plain_mode: bool,
    #[serde(default)]
    pub failure_policy: FailurePolicy,
    #[serde(default = "default_entries")]
    pub entries: Vec<EntryConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            clear_screen: true,
            plain_mode: false,
            failure_policy: FailurePolicy::default(),
            entries: default_entries(),
        }
    }
}

impl Config {
    /// Checks every entry and returns them with an exit entry guaranteed last
    /// when none was configured.
    pub fn menu_entries(&self) -> Result<Vec<EntryConfig>, ConfigError> {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        for entry in &self.entries {
            if entry.label().trim().is_empty() {
                return Err(ConfigError::Invalid("menu labels must not be empty".into()));
            }
            if let EntryConfig::Command { label, command, .. } = entry {
                split_command(label, command)?;
            }
            entries.push(entry.clone());
        }
        if !entries.iter().any(EntryConfig::is_exit) {
            entries.push(EntryConfig::exit(EXIT_LABEL));
        }
        Ok(entries)
    }
}

/// Splits a configured command line into program and arguments.
pub fn split_command(label: &str, command: &str) -> Result<Vec<String>, ConfigError> {
    let words = shell_words::split(command).map_err(|err| {
        ConfigError::Invalid(format!("command for `{label}` cannot be parsed: {err}"))
    })?;
    if words.is_empty() {
        return Err(ConfigError::Invalid(format!(
            "command for `{label}` is empty"
        )));
    }
    Ok(words)
}

fn default_true() -> bool {
    true
}

fn default_entries() -> Vec<EntryConfig> {
    vec![
        EntryConfig::command("xml_tool", "lxml_upgrade_tool", false),
        EntryConfig::command("bat_tool", "run_upgrade_tool", true),
        EntryConfig::command("scenario_compare_tool", "scenario_compare_tool", true),
        EntryConfig::placeholder("aggregate_gridded_data"),
        EntryConfig::command(
            "generate_template_csv_files",
            "input_csv_templates_tool",
            true,
        ),
        EntryConfig::exit(EXIT_LABEL),
    ]
}

/// Reads `config.json` from the application home.
pub struct ConfigManager {
    path: PathBuf,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            path: paths::config_file_in(&base),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the configuration, falling back to the built-in menu when the
    /// file does not exist yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config = serde_json::from_str(&data)?;
            tracing::info!(path = %self.path.display(), "loaded menu configuration");
            Ok(config)
        } else {
            tracing::info!(path = %self.path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }
}
