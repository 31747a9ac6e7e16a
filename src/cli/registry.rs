use crate::cli::actions::{ExitAction, ExternalTool, PendingTool};
use crate::cli::console::Console;
use crate::cli::selection;
use crate::config::{self, Config, EntryConfig, EXIT_LABEL};
use crate::errors::{ActionError, ConfigError, SelectionError};

/// What the menu loop does after an action returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

pub type ActionResult = Result<LoopControl, ActionError>;

/// A unit of work bound to a menu entry.
///
/// Actions only see the console; anything else they need is captured when the
/// registry is built.
pub trait Action {
    fn run(&mut self, console: &mut Console<'_>) -> ActionResult;
}

struct FnAction<F>(F);

impl<F> Action for FnAction<F>
where
    F: FnMut(&mut Console<'_>) -> ActionResult,
{
    fn run(&mut self, console: &mut Console<'_>) -> ActionResult {
        (self.0)(console)
    }
}

pub struct MenuEntry {
    label: String,
    action: Box<dyn Action>,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, action: impl Action + 'static) -> Self {
        Self {
            label: label.into(),
            action: Box::new(action),
        }
    }

    pub fn from_fn<F>(label: impl Into<String>, handler: F) -> Self
    where
        F: FnMut(&mut Console<'_>) -> ActionResult + 'static,
    {
        Self::new(label, FnAction(handler))
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn run(&mut self, console: &mut Console<'_>) -> ActionResult {
        self.action.run(console)
    }
}

/// Ordered, fixed set of menu entries addressed by position.
pub struct MenuRegistry {
    entries: Vec<MenuEntry>,
}

impl MenuRegistry {
    /// Builds a registry; an empty list becomes a lone exit entry so the menu
    /// always has something to select.
    pub fn new(mut entries: Vec<MenuEntry>) -> Self {
        if entries.is_empty() {
            entries.push(MenuEntry::new(EXIT_LABEL, ExitAction));
        }
        Self { entries }
    }

    /// Binds every configured entry to its built-in action.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let entries = config
            .menu_entries()?
            .into_iter()
            .map(|entry| -> Result<MenuEntry, ConfigError> {
                match entry {
                    EntryConfig::Command {
                        label,
                        command,
                        working_dir,
                        pause,
                    } => {
                        let words = config::split_command(&label, &command)?;
                        let tool = ExternalTool::new(label.clone(), words)
                            .with_working_dir(working_dir)
                            .with_pause(pause);
                        Ok(MenuEntry::new(label, tool))
                    }
                    EntryConfig::Placeholder { label, pause } => {
                        let tool = PendingTool::new(label.clone()).with_pause(pause);
                        Ok(MenuEntry::new(label, tool))
                    }
                    EntryConfig::Exit { label } => Ok(MenuEntry::new(label, ExitAction)),
                }
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        tracing::debug!(entries = entries.len(), "menu registry built");
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction guarantees at least one entry.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(MenuEntry::label)
    }

    pub fn resolve(&self, raw: &str) -> Result<usize, SelectionError> {
        selection::resolve(raw, self.entries.len())
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MenuEntry> {
        self.entries.get_mut(index)
    }
}
