//! Application configuration resolved at build time.
//!
//! The dashboard has no server and no runtime environment to read from, so
//! settings are baked in through `option_env!` when the WASM bundle is built.
//! Missing or unparseable values fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_AUTH_LATENCY_MS: u64 = 1000;
pub const DEFAULT_TOAST_TTL_MS: u64 = 4000;
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    /// Artificial delay applied by the simulated credential check.
    pub auth_latency: Duration,
    /// How long a toast stays on screen before auto-dismissing.
    pub toast_ttl: Duration,
    pub log_level: log::Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            auth_latency: Duration::from_millis(DEFAULT_AUTH_LATENCY_MS),
            toast_ttl: Duration::from_millis(DEFAULT_TOAST_TTL_MS),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `PULSEBOARD_AUTH_LATENCY_MS`: default 1000
    /// - `PULSEBOARD_TOAST_TTL_MS`: default 4000
    /// - `PULSEBOARD_LOG_LEVEL`: default `info`
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PULSEBOARD_AUTH_LATENCY_MS"),
            option_env!("PULSEBOARD_TOAST_TTL_MS"),
            option_env!("PULSEBOARD_LOG_LEVEL"),
        )
    }

    #[must_use]
    pub fn from_values(auth_latency_ms: Option<&str>, toast_ttl_ms: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            auth_latency: Duration::from_millis(parse_or(auth_latency_ms, DEFAULT_AUTH_LATENCY_MS)),
            toast_ttl: Duration::from_millis(parse_or(toast_ttl_ms, DEFAULT_TOAST_TTL_MS)),
            log_level: parse_or(log_level, DEFAULT_LOG_LEVEL),
        }
    }
}

fn parse_or<T>(raw: Option<&str>, default: T) -> T
where
    T: FromStr,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}
