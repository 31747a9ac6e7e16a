/// Compile-time build metadata produced by `build.rs`.
#[derive(Debug, Clone, Copy)]
pub struct BuildMetadata {
    pub version: &'static str,
    pub git_hash: &'static str,
    pub git_status: &'static str,
    pub timestamp: &'static str,
    pub target: &'static str,
    pub profile: &'static str,
}

/// Full package version, logged at startup.
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

/// `major.minor` shown on the menu screen.
pub const SCREEN_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION_MAJOR"),
    ".",
    env!("CARGO_PKG_VERSION_MINOR")
);

/// Returns the statically-embedded build metadata.
pub fn current() -> BuildMetadata {
    BuildMetadata {
        version: CLI_VERSION,
        git_hash: option_env!("FTOT_TOOLS_BUILD_HASH").unwrap_or("unknown"),
        git_status: option_env!("FTOT_TOOLS_BUILD_STATUS").unwrap_or("unknown"),
        timestamp: option_env!("FTOT_TOOLS_BUILD_TIMESTAMP").unwrap_or("unknown"),
        target: option_env!("FTOT_TOOLS_BUILD_TARGET").unwrap_or("unknown"),
        profile: option_env!("FTOT_TOOLS_BUILD_PROFILE").unwrap_or("unknown"),
    }
}
