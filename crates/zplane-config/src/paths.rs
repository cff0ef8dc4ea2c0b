//! Platform-specific configuration paths.
//!
//! # Directory Structure
//!
//! - **User config**: `~/.config/zplane/` (Linux), `~/Library/Application Support/zplane/` (macOS), `%APPDATA%\zplane\` (Windows)
//! - **Settings file**: `settings.toml` inside the user config directory
//!
//! # Example
//!
//! ```rust,no_run
//! use zplane_config::paths;
//!
//! println!("Settings: {:?}", paths::settings_file());
//! ```

use std::path::PathBuf;

/// Application name used for directory paths.
const APP_NAME: &str = "zplane";

/// File name of the user settings file.
const SETTINGS_FILE: &str = "settings.toml";

/// Returns the user-specific configuration directory.
///
/// # Platform Paths
///
/// - Linux: `~/.config/zplane/`
/// - macOS: `~/Library/Application Support/zplane/`
/// - Windows: `%APPDATA%\zplane\`
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the path of the user settings file.
pub fn settings_file() -> PathBuf {
    user_config_dir().join(SETTINGS_FILE)
}
