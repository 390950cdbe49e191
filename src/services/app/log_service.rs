//! Logger setup for the command-line binary.

use std::io::Write;

/// Render one log line as `[LEVEL] message`.
pub fn format_line(level: log::Level, message: &str) -> String {
    format!("[{level}] {message}")
}

/// Default filter: `info`, or `debug` when `verbose`.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Install `env_logger` as the `log` backend. `RUST_LOG` overrides the default
/// filter. Calling this twice is harmless.
pub fn init_logger(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or(default_filter(verbose));
    let result = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(record.level(), &record.args().to_string())
            )
        })
        .try_init();

    if let Err(e) = result {
        log::debug!("Logger already initialized: {e}");
    }
}
