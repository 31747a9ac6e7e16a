use dirs::home_dir;
use std::{
    env,
    path::{Path, PathBuf},
};

const DEFAULT_DIR_NAME: &str = ".ftot_tools";
const CONFIG_FILE: &str = "config.json";

/// Environment variable that relocates the application home.
pub const HOME_ENV: &str = "FTOT_TOOLS_HOME";

/// Returns the application-specific data directory, defaulting to `~/.ftot_tools`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Path to the configuration file inside `base`.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}
