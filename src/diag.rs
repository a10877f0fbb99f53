//! Opt-in console diagnostics, gated on the `loggingEnabled` preference.

pub(crate) const LOG_PREFIX: &str = "Slides Image Spotlight |";

macro_rules! diag {
    ($($arg:expr),+ $(,)?) => {
        if $crate::options::logging_enabled() {
            gloo::console::log!($crate::diag::LOG_PREFIX, $($arg),+);
        }
    };
}

macro_rules! diag_warn {
    ($($arg:expr),+ $(,)?) => {
        if $crate::options::logging_enabled() {
            gloo::console::warn!($crate::diag::LOG_PREFIX, $($arg),+);
        }
    };
}

pub(crate) use diag;
pub(crate) use diag_warn;
