//! Stderr diagnostics for critical path runs, gated by
//! `CriticalPathConfig::verbosity`.
//!
//! Arguments are only formatted when the level is enabled. Levels:
//! - 0: silent; failures travel back as `Err` values
//! - 1: the critical path picked for the project
//! - 2: validation and each per-source run
//! - 3: solver counters (heap pops, stale entries, relaxations)

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Write one `[cpm]`-prefixed line to stderr when `verbosity >= level`.
#[macro_export]
macro_rules! log_at {
    ($level:expr, $verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $level {
            eprintln!("[cpm] {}", format_args!($($arg)*));
        }
    };
}

/// Result summary.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_CHANGES, $verbosity, $($arg)*)
    };
}

/// Validation and per-source runs.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_CHECKS, $verbosity, $($arg)*)
    };
}

/// Solver internals.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        $crate::log_at!($crate::logging::VERBOSITY_DEBUG, $verbosity, $($arg)*)
    };
}
