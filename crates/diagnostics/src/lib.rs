//! Diagnostics for the Circuitdocs workspace.
//!
//! Lightweight, configurable logging shared by all crates in the project.
//!
//! Usage:
//! - Set CIRCUITDOCS_LOG=off (default) - no logs
//! - Set CIRCUITDOCS_LOG=info - config loading and validation summaries
//! - Set CIRCUITDOCS_LOG=debug - detailed diagnostic logs

use std::sync::Once;

// Re-export emit so macros can use it
pub use emit;

static INIT: Once = Once::new();

/// Initialize diagnostics based on the CIRCUITDOCS_LOG environment variable.
///
/// Call once at application startup. Safe to call multiple times -
/// subsequent calls are ignored.
pub fn init_diagnostics() {
    INIT.call_once(|| {
        let log_level = std::env::var("CIRCUITDOCS_LOG").unwrap_or_else(|_| "off".to_string());

        let rt = match log_level.as_str() {
            "off" => return,
            "debug" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Debug))
                .init(),
            "info" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Info))
                .init(),
            "warn" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Warn))
                .init(),
            "error" => emit::setup()
                .emit_to(emit_term::stderr())
                .emit_when(emit::level::min_filter(emit::Level::Error))
                .init(),
            _ => {
                let rt = emit::setup()
                    .emit_to(emit_term::stderr())
                    .emit_when(emit::level::min_filter(emit::Level::Info))
                    .init();
                eprintln!(
                    "Warning: Unknown CIRCUITDOCS_LOG value '{}', using 'info'",
                    log_level
                );
                rt
            }
        };

        // The emit runtime must outlive every logging call site.
        std::mem::forget(rt);
    });
}

/// Log basic operations (config loads, validation passes).
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::emit::info!($($arg)*)
    };
}

/// Log detailed diagnostics (parsed fields, defaults applied, fragment sizes).
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::emit::debug!($($arg)*)
    };
}

/// Log warning conditions (missing destinations, fallbacks, recoverable errors).
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::emit::warn!($($arg)*)
    };
}

/// Log critical error conditions (unreadable config, serialization failures).
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::emit::error!($($arg)*)
    };
}

/// Re-export the init function for convenience
pub use init_diagnostics as init;
