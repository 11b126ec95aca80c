use std::io;
use std::str::FromStr;
use std::sync::Mutex;

use slog::{error, o, Drain, Level, Logger};

use super::get_env;

/// Environment variable holding the minimum log level.
pub const LOG_LEVEL_ENV: &str = "FFT_LOG_LEVEL";

/// Parses a level name such as `debug` or `warn`, falling back to `Info`.
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(Level::Info)
}

/// Builds the JSON logger. Records go to stderr so stdout only carries the
/// run summary.
pub fn get_logger() -> Logger {
    let level = parse_level(&get_env(LOG_LEVEL_ENV, Some("info")));
    let drain = slog_json::Json::default(io::stderr()).fuse();
    let drain = Mutex::new(drain).fuse();
    let drain = drain.filter_level(level).fuse();
    Logger::root(drain, o!("app" => env!("CARGO_PKG_NAME")))
}

/// Logs `err` and every error in its source chain under `context`.
pub fn error_context(logger: &Logger, context: &str, err: &(dyn std::error::Error + 'static)) {
    let mut causes = Vec::new();
    let mut source = err.source();
    while let Some(cause) = source {
        causes.push(cause.to_string());
        source = cause.source();
    }
    error!(logger, "{}", context; "error" => err.to_string(), "causes" => causes.join(": "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Level::Debug);
        assert_eq!(parse_level(" warn "), Level::Warning);
        assert_eq!(parse_level("error"), Level::Error);
        assert_eq!(parse_level("loud"), Level::Info);
        assert_eq!(parse_level(""), Level::Info);
    }

    #[test]
    fn test_error_context_accepts_chained_errors() {
        let logger = Logger::root(slog::Discard, o!());
        let inner = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let outer = crate::output::SinkError::Io { path: "fft_output.txt".into(), source: inner };
        error_context(&logger, "could not write spectrum", &outer);
    }
}
