//! Built-in menu actions.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

use crate::cli::console::Console;
use crate::cli::output;
use crate::cli::registry::{Action, ActionResult, LoopControl};
use crate::errors::ActionError;

/// Ends the menu session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitAction;

impl Action for ExitAction {
    fn run(&mut self, _console: &mut Console<'_>) -> ActionResult {
        tracing::info!("exit selected");
        Ok(LoopControl::Exit)
    }
}

/// Runs an external tool as a child process attached to the terminal.
#[derive(Debug, Clone)]
pub struct ExternalTool {
    label: String,
    program: String,
    args: Vec<String>,
    working_dir: Option<PathBuf>,
    pause: bool,
}

impl ExternalTool {
    /// `words` is the split command line; the first word is the program.
    pub fn new(label: impl Into<String>, words: Vec<String>) -> Self {
        let mut words = words.into_iter();
        let program = words.next().unwrap_or_default();
        Self {
            label: label.into(),
            program,
            args: words.collect(),
            working_dir: None,
            pause: true,
        }
    }

    pub fn with_working_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.working_dir = dir;
        self
    }

    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Action for ExternalTool {
    fn run(&mut self, console: &mut Console<'_>) -> ActionResult {
        writeln!(console, "You called {}", self.label)?;
        // The child writes straight to the terminal.
        console.flush()?;

        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        tracing::info!(program = %self.program, args = ?self.args, "launching tool");
        let status = command.status().map_err(|source| ActionError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        if !status.success() {
            return Err(ActionError::ExitStatus {
                program: self.program.clone(),
                status,
            });
        }

        if self.pause {
            console.pause()?;
        }
        Ok(LoopControl::Continue)
    }
}

/// A menu slot for a tool that is not available yet.
#[derive(Debug, Clone)]
pub struct PendingTool {
    label: String,
    pause: bool,
}

impl PendingTool {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pause: true,
        }
    }

    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }
}

impl Action for PendingTool {
    fn run(&mut self, console: &mut Console<'_>) -> ActionResult {
        writeln!(console, "You called {}", self.label)?;
        output::warning(console, format!("{} is not available yet.", self.label))?;
        if self.pause {
            console.pause()?;
        }
        Ok(LoopControl::Continue)
    }
}
