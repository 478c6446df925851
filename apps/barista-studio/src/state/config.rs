//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BARISTA_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use barista_core::Money;
use directories::ProjectDirs;

/// File name of the persisted sound settings.
pub const SETTINGS_FILE_NAME: &str = "sound-settings.json";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct ConfigState {
    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Where sound settings are persisted.
    /// `None` keeps settings in memory only.
    pub settings_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Currency: `$`
    /// - Settings: `<platform config dir>/sound-settings.json`
    fn default() -> Self {
        ConfigState {
            currency_symbol: "$".to_string(),
            settings_path: default_settings_path(),
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BARISTA_SETTINGS_PATH`: Override the settings file location
    /// - `BARISTA_CURRENCY_SYMBOL`: Override the currency symbol
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(path) = std::env::var("BARISTA_SETTINGS_PATH") {
            config.settings_path = Some(PathBuf::from(path));
        }

        if let Ok(symbol) = std::env::var("BARISTA_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        config
    }

    /// Formats a price with the configured symbol.
    ///
    /// ## Example
    /// ```rust
    /// use barista_core::Money;
    /// use barista_studio_lib::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_cents(380)), "$3.80");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        let fixed = amount.fixed();
        match fixed.strip_prefix('-') {
            Some(magnitude) => format!("-{}{}", self.currency_symbol, magnitude),
            None => format!("{}{}", self.currency_symbol, fixed),
        }
    }

    /// Formats an add-on price delta (`+$0.50`).
    pub fn format_delta(&self, amount: Money) -> String {
        format!("+{}", self.format_currency(amount))
    }
}

/// Platform-specific settings location.
///
/// - **macOS**: `~/Library/Application Support/com.barista.studio/`
/// - **Windows**: `%APPDATA%\barista\studio\config\`
/// - **Linux**: `~/.config/barista-studio/`
fn default_settings_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "barista", "studio").map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}
