#![doc(test(attr(deny(warnings))))]

//! FTOT Tools is the interactive launcher for the FTOT maintenance utilities:
//! it lists the configured tools as a numbered menu, reads a selection, and runs
//! the matching tool until the user exits.

pub mod cli;
pub mod config;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing, routes panic reports through it, and logs the
/// embedded build metadata.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        utils::install_panic_hook();
        let build = utils::build_info::current();
        tracing::info!(
            version = build.version,
            git_hash = build.git_hash,
            git_status = build.git_status,
            built_at = build.timestamp,
            target = build.target,
            profile = build.profile,
            "FTOT Tools tracing initialized."
        );
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
