//! Constants used throughout the application.
//!
//! Defaults for the table lookup, the query bootstrap, and the TUI.

pub const PHRASE_MAX_LENGTH: usize = 1000;
pub const DEFAULT_TABLE_ID: &str = "compat";
pub const DEFAULT_HIDDEN_STYLE: &str = "display:none";
pub const DEFAULT_TRACKING_PARAMS: &[&str] = &["fbclid"];
pub const LOG_FILE_NAME: &str = "compat-filter-debug.log";
pub const CONFIG_ENV_VAR: &str = "COMPAT_FILTER_CONFIG";
pub const CONFIG_DIR_NAME: &str = "compat-filter";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const SCROLL_PAGE_SIZE: usize = 10;
