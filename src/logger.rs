//! Console output for progress lines.
//!
//! Everything the tool reports goes through these macros so tests can run
//! silently with [`set_quiet_mode`].

use std::sync::atomic::{AtomicBool, Ordering};

static QUIET_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_quiet_mode(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            println!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            println!("✅ {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! skip {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            println!("⏭️  {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if !$crate::logger::is_quiet() {
            eprintln!("⚠️  {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("❌ {}", format!($($arg)*));
    };
}
