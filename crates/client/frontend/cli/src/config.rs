//! CLI-specific configuration for terminal UI.
use std::env;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface,
/// separate from cross-frontend client configuration.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SLOT_HISTORY_PANEL_HEIGHT` - History panel height in lines (default: 8)
    /// - `SLOT_INPUT_POLL_MS` - Keyboard polling interval (default: 16)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(height) = read_env::<u16>("SLOT_HISTORY_PANEL_HEIGHT") {
            config.ui.history_panel_height = height.max(3);
        }
        if let Some(interval) = read_env::<u64>("SLOT_INPUT_POLL_MS") {
            config.ui.input_poll_ms = interval.max(1);
        }

        config
    }
}

/// UI layout and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    /// Height of history panel in lines (including borders).
    pub history_panel_height: u16,
    pub input_poll_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            history_panel_height: 8,
            input_poll_ms: 16,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
