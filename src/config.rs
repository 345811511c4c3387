use std::net::SocketAddr;
use std::time::Duration;
use tracing::warn;

use crate::clock::ClockConfig;

const ADDR_VAR: &str = "ARENASCORE_ADDR";
const CLOCK_TICK_VAR: &str = "ARENASCORE_CLOCK_TICK_MS";
const CORS_ANY_VAR: &str = "ARENASCORE_CORS_ANY";

/// Server settings, read from the environment with defaults
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub clock: ClockConfig,
    /// Allow requests from any origin, for a UI served from elsewhere
    pub allow_any_origin: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            clock: ClockConfig::default(),
            allow_any_origin: true,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; unparsable values keep the default
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(ADDR_VAR) {
            match raw.parse() {
                Ok(addr) => config.bind_addr = addr,
                Err(_) => warn!(var = ADDR_VAR, value = %raw, "Ignoring invalid bind address"),
            }
        }

        if let Some(raw) = lookup(CLOCK_TICK_VAR) {
            match raw.parse::<u64>() {
                Ok(ms) if ms > 0 => config.clock.tick_interval = Duration::from_millis(ms),
                _ => warn!(var = CLOCK_TICK_VAR, value = %raw, "Ignoring invalid clock tick"),
            }
        }

        if let Some(raw) = lookup(CORS_ANY_VAR) {
            match raw.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => config.allow_any_origin = true,
                "0" | "false" | "no" => config.allow_any_origin = false,
                _ => warn!(var = CORS_ANY_VAR, value = %raw, "Ignoring invalid CORS flag"),
            }
        }

        config
    }
}
