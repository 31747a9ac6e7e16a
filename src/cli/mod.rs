pub mod actions;
pub mod console;
pub mod controller;
pub mod output;
pub mod registry;
pub mod selection;
mod shell;
pub mod ui;

pub use console::Console;
pub use controller::{ControllerOptions, ControllerState, MenuController};
pub use registry::{Action, ActionResult, LoopControl, MenuEntry, MenuRegistry};
pub use shell::{run_cli, run_session};
