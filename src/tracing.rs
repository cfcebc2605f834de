//! Tracing setup for the server
//!
//! Stdout carries the protocol, so console logs go to stderr.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=walk=trace` - every visited syntax node
//! - `RUST_LOG=syntax_server::protocol=debug` - module-level filtering
//!
//! `-debug` appends `walk=trace,syntax_server=debug` to whatever RUST_LOG sets.
//!
//! # Log Files
//!
//! Logs are written to `~/.config/syntax-server/logs/syntax-server.log` with
//! daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Directives added by `-debug`
pub const DEBUG_DIRECTIVES: &str = "walk=trace,syntax_server=debug";

/// Filter string for the console layer
pub fn console_directives(env: Option<&str>, debug: bool) -> String {
    let base = env
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("warn");
    if debug {
        format!("{},{}", base, DEBUG_DIRECTIVES)
    } else {
        base.to_string()
    }
}

/// Initialize tracing subscriber with console and file logging
pub fn init(debug: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let console_filter = EnvFilter::try_new(console_directives(env.as_deref(), debug))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - debug level, plus node traces under -debug
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "syntax-server.log");
            let directives = if debug {
                format!("debug,{}", DEBUG_DIRECTIVES)
            } else {
                "debug,walk=off".to_string()
            };
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new(directives)),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives() {
        assert_eq!(console_directives(None, false), "warn");
        assert_eq!(console_directives(Some("  "), false), "warn");
    }

    #[test]
    fn test_env_directives_respected() {
        assert_eq!(console_directives(Some("info"), false), "info");
    }

    #[test]
    fn test_debug_appends_walk_trace() {
        assert_eq!(
            console_directives(None, true),
            "warn,walk=trace,syntax_server=debug"
        );
        assert!(EnvFilter::try_new(console_directives(Some("info"), true)).is_ok());
    }
}
