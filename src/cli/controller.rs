use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};

use crate::cli::console::Console;
use crate::cli::output;
use crate::cli::registry::{LoopControl, MenuRegistry};
use crate::cli::ui::menu_renderer::{MenuRenderer, PROMPT_MARKER};
use crate::config::{Config, FailurePolicy};
use crate::errors::{ActionError, MenuError, SelectionError};
use crate::utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Showing the menu or waiting for a selection.
    Prompting,
    /// An action is running.
    Dispatching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    pub clear_screen: bool,
    pub failure_policy: FailurePolicy,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            clear_screen: true,
            failure_policy: FailurePolicy::Report,
        }
    }
}

impl From<&Config> for ControllerOptions {
    fn from(config: &Config) -> Self {
        Self {
            clear_screen: config.clear_screen,
            failure_policy: config.failure_policy,
        }
    }
}

/// Runs the render, read, dispatch cycle over a fixed registry.
pub struct MenuController<'a> {
    registry: MenuRegistry,
    console: Console<'a>,
    options: ControllerOptions,
    state: ControllerState,
}

impl<'a> MenuController<'a> {
    pub fn new(registry: MenuRegistry, console: Console<'a>, options: ControllerOptions) -> Self {
        Self {
            registry,
            console,
            options,
            state: ControllerState::Prompting,
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn registry(&self) -> &MenuRegistry {
        &self.registry
    }

    pub fn render(&mut self) -> Result<(), MenuError> {
        if self.options.clear_screen {
            self.console.clear_screen()?;
        }
        MenuRenderer::render(&mut self.console, &self.registry)?;
        Ok(())
    }

    /// Shows the prompt marker and blocks for one line; `None` when input is closed.
    pub fn read_selection(&mut self) -> Result<Option<String>, MenuError> {
        Ok(self.console.prompt(PROMPT_MARKER)?)
    }

    pub fn resolve(&self, raw: &str) -> Result<usize, SelectionError> {
        self.registry.resolve(raw)
    }

    /// Runs the action at `index` once.
    ///
    /// Errors and panics raised by the action are contained here; depending on
    /// the failure policy they are reported and the menu continues, or they end
    /// the session as [`MenuError::Collaborator`].
    pub fn dispatch(&mut self, index: usize) -> Result<LoopControl, MenuError> {
        let len = self.registry.len();
        let entry = self
            .registry
            .get_mut(index)
            .ok_or_else(|| SelectionError::Range {
                input: index.to_string(),
                len,
            })?;
        let label = entry.label().to_string();

        tracing::info!(index, entry = %label, "dispatching menu entry");
        self.state = ControllerState::Dispatching;
        let console = &mut self.console;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| entry.run(console)))
            .unwrap_or_else(|payload| {
                Err(ActionError::Panicked(utils::panic_message(payload.as_ref())))
            });
        self.state = ControllerState::Prompting;

        match outcome {
            Ok(control) => Ok(control),
            Err(source) => self.handle_failure(label, source),
        }
    }

    /// Loops until the exit entry runs or input is closed. Unparseable and
    /// out-of-range selections redraw the menu without comment.
    pub fn run_loop(&mut self) -> Result<(), MenuError> {
        loop {
            self.render()?;
            let Some(raw) = self.read_selection()? else {
                tracing::info!("input closed, leaving menu");
                writeln!(self.console)?;
                output::info(&mut self.console, "Exiting FTOT Tools.")?;
                return Ok(());
            };

            let index = match self.resolve(&raw) {
                Ok(index) => index,
                Err(err) => {
                    tracing::debug!(error = %err, "ignoring selection");
                    continue;
                }
            };

            match self.dispatch(index)? {
                LoopControl::Continue => {}
                LoopControl::Exit => return Ok(()),
            }
        }
    }

    fn handle_failure(
        &mut self,
        label: String,
        source: ActionError,
    ) -> Result<LoopControl, MenuError> {
        tracing::error!(entry = %label, error = %source, "menu action failed");
        match self.options.failure_policy {
            FailurePolicy::Report => {
                self.report_failure(&label, &source)?;
                Ok(LoopControl::Continue)
            }
            FailurePolicy::Abort => Err(MenuError::Collaborator { label, source }),
        }
    }

    fn report_failure(&mut self, label: &str, source: &ActionError) -> io::Result<()> {
        output::error(&mut self.console, format!("`{label}` failed: {source}"))?;
        // Keep the message on screen until the next redraw is acknowledged.
        self.console.pause()
    }
}
