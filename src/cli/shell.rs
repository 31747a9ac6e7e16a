use crate::cli::console::Console;
use crate::cli::controller::{ControllerOptions, MenuController};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::registry::MenuRegistry;
use crate::config::{Config, ConfigManager};
use crate::errors::MenuError;

/// Loads the configuration from the application home and runs the menu on
/// the process stdin/stdout until the user exits.
pub fn run_cli() -> Result<(), MenuError> {
    let manager = ConfigManager::new();
    let config = manager.load()?;
    run_session(&config, Console::stdio())
}

/// Runs one menu session for `config` over `console`.
pub fn run_session(config: &Config, console: Console<'_>) -> Result<(), MenuError> {
    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_mode,
    });
    let registry = MenuRegistry::from_config(config)?;
    let mut controller = MenuController::new(registry, console, ControllerOptions::from(config));
    controller.run_loop()
}
