//! Reporting seam between the restructuring services and the outside world.

/// Sink for user-facing progress and warning messages.
pub trait Reporter {
    fn report(&self, level: log::Level, message: &str);
}

/// Forwards every message to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, level: log::Level, message: &str) {
        log::log!(level, "{message}");
    }
}
