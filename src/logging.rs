//! Logging macros for the scheduler with verbosity level control.
//!
//! Zero-cost when disabled (verbosity=0). Levels:
//! - 0: SILENT (only errors)
//! - 1: DECISIONS (submissions, extractions, priority changes)
//! - 2: SIFT (heap movement detail)
//! - 3: DEBUG (queue snapshots, full internals)

/// Verbosity level constants.
pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_DECISIONS: u8 = 1;
pub const VERBOSITY_SIFT: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Log at DECISIONS level (verbosity >= 1).
///
/// Used for: task submissions, extractions, priority changes.
#[macro_export]
macro_rules! log_decisions {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DECISIONS {
            eprintln!($($arg)*);
        }
    };
}

/// Log at SIFT level (verbosity >= 2).
///
/// Used for: individual sift-up/sift-down swaps inside the heap.
#[macro_export]
macro_rules! log_sift {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SIFT {
            eprintln!($($arg)*);
        }
    };
}

/// Log at DEBUG level (verbosity >= 3).
///
/// Used for: queue snapshots, internal detail.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}
