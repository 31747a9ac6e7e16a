use std::{io, process::ExitStatus};

use thiserror::Error;

/// Why a raw menu selection could not be turned into a registry index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("`{input}` is not a menu number")]
    Parse { input: String },
    #[error("`{input}` is outside the menu range 0..{len}")]
    Range { input: String, len: usize },
}

/// Failure raised by a menu action while it runs.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("`{program}` exited with {status}")]
    ExitStatus { program: String, status: ExitStatus },
    #[error("action panicked: {0}")]
    Panicked(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Configuration loading and validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level error returned by the menu session.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("console error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("`{label}` failed: {source}")]
    Collaborator {
        label: String,
        #[source]
        source: ActionError,
    },
}
