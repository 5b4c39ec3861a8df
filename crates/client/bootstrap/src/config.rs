//! Runtime configuration structures and loaders.
use std::env;

use slot_core::{MachineConfig, Symbol};

/// Configuration required to bootstrap the machine runtime.
#[derive(Clone, Debug, Default)]
pub struct RuntimeConfig {
    pub machine: MachineConfig,
    pub channels: ChannelConfig,
    pub seed: Option<u64>,
}

impl RuntimeConfig {
    pub const fn new(machine: MachineConfig, channels: ChannelConfig) -> Self {
        Self {
            machine,
            channels,
            seed: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SLOT_SPIN_INTERVAL_MS` - Randomization tick interval (default: 50)
    /// - `SLOT_STOP_STAGGER_MS` - Delay between reel halts (default: 500)
    /// - `SLOT_HIGHLIGHT_MS` - Win highlight duration (default: 500)
    /// - `SLOT_JACKPOT_SYMBOL` - Symbol forced by the cheat (default: seven)
    /// - `SLOT_SEED` - Fixed RNG seed (default: OS entropy)
    /// - `SLOT_EVENT_BUFFER` - Event bus capacity per topic (default: 100)
    /// - `SLOT_COMMAND_BUFFER` - Command queue size (default: 32)
    ///
    /// Unparsable values are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        // Machine timings
        if let Some(interval) = parse::<u64>(lookup("SLOT_SPIN_INTERVAL_MS")) {
            config.machine.spin_interval_ms = interval.max(1);
        }
        if let Some(stagger) = parse::<u64>(lookup("SLOT_STOP_STAGGER_MS")) {
            config.machine.stop_stagger_ms = stagger;
        }
        if let Some(highlight) = parse::<u64>(lookup("SLOT_HIGHLIGHT_MS")) {
            config.machine.highlight_ms = highlight;
        }
        if let Some(symbol) = parse::<Symbol>(lookup("SLOT_JACKPOT_SYMBOL")) {
            config.machine.jackpot_symbol = symbol;
        }

        config.seed = parse::<u64>(lookup("SLOT_SEED"));

        // Channel configuration
        if let Some(capacity) = parse::<usize>(lookup("SLOT_EVENT_BUFFER")) {
            config.channels.event_buffer = capacity.max(1);
        }
        if let Some(capacity) = parse::<usize>(lookup("SLOT_COMMAND_BUFFER")) {
            config.channels.command_buffer = capacity.max(1);
        }

        config
    }

    /// Converts into the runtime crate's configuration.
    pub fn runtime_config(&self) -> runtime::RuntimeConfig {
        runtime::RuntimeConfig {
            machine: self.machine.clone(),
            seed: self.seed,
            event_buffer_size: self.channels.event_buffer,
            command_buffer_size: self.channels.command_buffer,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub event_buffer: usize,
    pub command_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            event_buffer: 100,
            command_buffer: 32,
        }
    }
}

fn parse<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> RuntimeConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        RuntimeConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.machine, MachineConfig::default());
        assert_eq!(config.seed, None);
        assert_eq!(config.channels.event_buffer, 100);
        assert_eq!(config.channels.command_buffer, 32);
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("SLOT_SPIN_INTERVAL_MS", "20"),
            ("SLOT_STOP_STAGGER_MS", "250"),
            ("SLOT_HIGHLIGHT_MS", "900"),
            ("SLOT_JACKPOT_SYMBOL", "Bell"),
            ("SLOT_SEED", "1234"),
            ("SLOT_EVENT_BUFFER", "8"),
            ("SLOT_COMMAND_BUFFER", "4"),
        ]);

        assert_eq!(config.machine.spin_interval_ms, 20);
        assert_eq!(config.machine.stop_stagger_ms, 250);
        assert_eq!(config.machine.highlight_ms, 900);
        assert_eq!(config.machine.jackpot_symbol, Symbol::Bell);
        assert_eq!(config.seed, Some(1234));

        let runtime = config.runtime_config();
        assert_eq!(runtime.event_buffer_size, 8);
        assert_eq!(runtime.command_buffer_size, 4);
        assert_eq!(runtime.seed, Some(1234));
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let config = config_from(&[
            ("SLOT_SPIN_INTERVAL_MS", "fast"),
            ("SLOT_JACKPOT_SYMBOL", "plum"),
            ("SLOT_SEED", "-1"),
        ]);
        assert_eq!(config.machine.spin_interval_ms, 50);
        assert_eq!(config.machine.jackpot_symbol, Symbol::Seven);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn zero_interval_and_buffers_are_clamped() {
        let config = config_from(&[
            ("SLOT_SPIN_INTERVAL_MS", "0"),
            ("SLOT_EVENT_BUFFER", "0"),
        ]);
        assert_eq!(config.machine.spin_interval_ms, 1);
        assert_eq!(config.channels.event_buffer, 1);
    }
}
