// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Logging setup shared by every marketsite crate.
//!
//! Usage:
//! - Set MARKETSITE_LOG=off (default) - no logs
//! - Set MARKETSITE_LOG=info - page counts and output locations
//! - Set MARKETSITE_LOG=debug - every routed path and written file

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

/// Environment variable consulted by [`init_diagnostics`].
pub const LOG_ENV: &str = "MARKETSITE_LOG";

static INIT: Once = Once::new();

/// Parsed value of `MARKETSITE_LOG`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSetting {
    Off,
    Level(emit::Level),
    /// Unrecognised value; falls back to info.
    Unknown,
}

/// Map a `MARKETSITE_LOG` value to a setting. Matching is case-insensitive.
pub fn parse_log_setting(value: &str) -> LogSetting {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "off" => LogSetting::Off,
        "debug" => LogSetting::Level(emit::Level::Debug),
        "info" => LogSetting::Level(emit::Level::Info),
        "warn" => LogSetting::Level(emit::Level::Warn),
        "error" => LogSetting::Level(emit::Level::Error),
        _ => LogSetting::Unknown,
    }
}

/// Initialize diagnostics based on the MARKETSITE_LOG environment variable
///
/// Call once at startup. Subsequent calls are ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let raw = std::env::var(LOG_ENV).unwrap_or_default();
        let level = match parse_log_setting(&raw) {
            LogSetting::Off => return,
            LogSetting::Level(level) => level,
            LogSetting::Unknown => emit::Level::Info,
        };

        let rt = emit::setup()
            .emit_to(emit_term::stderr())
            .emit_when(emit::level::min_filter(level))
            .init();

        if parse_log_setting(&raw) == LogSetting::Unknown {
            emit::warn!("unknown {env} value {raw}, using info", env: LOG_ENV, raw);
        }

        // The runtime lives for the whole process; flushing happens at exit.
        std::mem::forget(rt);
    });
}

/// Log basic operations (pages generated, output directory, config loaded)
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (each routed path, each written file)
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log warning conditions (config fallbacks, skipped pages)
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log error conditions that stop generation
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_safe_to_call_multiple_times() {
        init_diagnostics();
        init_diagnostics();
        init_diagnostics();
    }

    #[test]
    fn test_parse_log_setting() {
        assert_eq!(parse_log_setting("off"), LogSetting::Off);
        assert_eq!(parse_log_setting(""), LogSetting::Off);
        assert_eq!(parse_log_setting("DEBUG"), LogSetting::Level(emit::Level::Debug));
        assert_eq!(parse_log_setting(" warn "), LogSetting::Level(emit::Level::Warn));
        assert_eq!(parse_log_setting("loud"), LogSetting::Unknown);
    }

    #[test]
    fn test_macros_compile() {
        info!("Test message");
        debug!("Debug message with {value}", value: 42);
        warn!("Warning message");
        error!("Error message");
    }
}
