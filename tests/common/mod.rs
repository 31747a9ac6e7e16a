use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use ftot_tools::cli::{
    Console, ControllerOptions, LoopControl, MenuController, MenuEntry, MenuRegistry,
};
use ftot_tools::config::FailurePolicy;
use ftot_tools::errors::MenuError;

/// Ordered record of which handlers ran.
pub type CallLog = Rc<RefCell<Vec<&'static str>>>;

pub struct SessionOutput {
    pub result: Result<(), MenuError>,
    pub stdout: String,
}

impl SessionOutput {
    pub fn prompts(&self) -> usize {
        self.stdout.matches(">> ").count()
    }
}

pub fn quiet_options() -> ControllerOptions {
    ControllerOptions {
        clear_screen: false,
        failure_policy: FailurePolicy::Report,
    }
}

/// Handler that logs `name` and hands control back to the menu.
pub fn recording(name: &'static str, log: &CallLog) -> MenuEntry {
    let log = Rc::clone(log);
    MenuEntry::from_fn(name, move |_console: &mut Console<'_>| {
        log.borrow_mut().push(name);
        Ok(LoopControl::Continue)
    })
}

/// Handler that logs `name` and ends the session.
pub fn terminating(name: &'static str, log: &CallLog) -> MenuEntry {
    let log = Rc::clone(log);
    MenuEntry::from_fn(name, move |_console: &mut Console<'_>| {
        log.borrow_mut().push(name);
        Ok(LoopControl::Exit)
    })
}

/// `[("a", h0), ("b", h1), ("exit", terminate)]`
pub fn abc_registry(log: &CallLog) -> MenuRegistry {
    MenuRegistry::new(vec![
        recording("a", log),
        recording("b", log),
        terminating("exit", log),
    ])
}

pub fn run_scripted(
    registry: MenuRegistry,
    input: impl AsRef<[u8]>,
    options: ControllerOptions,
) -> SessionOutput {
    let mut sink = Vec::new();
    let result = {
        let console = Console::new(Cursor::new(input.as_ref().to_vec()), &mut sink);
        MenuController::new(registry, console, options).run_loop()
    };
    SessionOutput {
        result,
        stdout: String::from_utf8(sink).expect("menu output is utf-8"),
    }
}
