pub mod build_info;
pub mod paths;

use std::any::Any;
use std::panic;
use std::sync::Once;

static TRACING_INIT: Once = Once::new();
static PANIC_HOOK_INIT: Once = Once::new();

const DEFAULT_DIRECTIVE: &str = "ftot_tools=warn";

/// Initializes the global tracing subscriber.
///
/// Diagnostics go to stderr so they never interleave with the menu screen on
/// stdout. `RUST_LOG` replaces the crate default when set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        // A subscriber may already be installed by an embedding binary or test.
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}

/// Replaces the default `panicked at` report with an error event. Panics
/// raised by menu actions are recovered and reported by the controller.
pub fn install_panic_hook() {
    PANIC_HOOK_INIT.call_once(|| {
        panic::set_hook(Box::new(|info| {
            let location = info
                .location()
                .map(|location| format!("{}:{}", location.file(), location.line()))
                .unwrap_or_else(|| "unknown".to_string());
            tracing::error!(
                location = %location,
                "unexpected panic: {}",
                panic_message(info.payload())
            );
        }));
    });
}

/// Extracts the message carried by a panic payload.
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
