use std::sync::atomic::{AtomicBool, Ordering};

/// Whether user-facing warnings are enabled.
pub(crate) static ENABLED: AtomicBool = AtomicBool::new(false);

/// Enable user-facing warnings.
pub(crate) fn enable() {
    ENABLED.store(true, Ordering::Relaxed);
}

/// Warn a user on stderr, if warnings are enabled.
///
/// Unlike `tracing` events, these are shown without `--verbose` or `RUST_LOG`.
macro_rules! warn_user {
    ($($arg:tt)*) => {{
        use anstream::eprintln;
        use owo_colors::OwoColorize;

        if $crate::warnings::ENABLED.load(std::sync::atomic::Ordering::Relaxed) {
            let message = format!("{}", format_args!($($arg)*));
            let formatted = message.bold();
            eprintln!("{}{} {formatted}", "warning".yellow().bold(), ":".bold());
        }
    }};
}

pub(crate) use warn_user;
