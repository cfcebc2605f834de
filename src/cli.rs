//! Command-line argument parsing for the server
//!
//! Supports:
//! - `-debug` / `--debug` to trace every visited syntax node
//! - `-V` / `--version` to print name, version and revision
//!
//! Editor plugins launch the server with Go-style single-dash long flags, so
//! those are rewritten to their double-dash form before clap sees them.

use clap::Parser;

/// Line-delimited JSON syntax highlighting server
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(
    name = "syntax-server",
    about = "Line-delimited JSON syntax highlighting server",
    disable_version_flag = true
)]
pub struct CliArgs {
    /// Log every visited syntax node to stderr and the log file
    #[arg(long)]
    pub debug: bool,

    /// Print version and revision, then exit
    #[arg(short = 'V', long)]
    pub version: bool,
}

impl CliArgs {
    /// Parse process arguments, accepting single-dash long flags
    pub fn from_env() -> Self {
        Self::parse_from(normalize_args(std::env::args()))
    }
}

/// Rewrite `-debug` and `-version` to `--debug` and `--version`.
///
/// Short flags (`-V`, `-h`) and everything else pass through unchanged.
pub fn normalize_args<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| match arg.as_str() {
            "-debug" | "-version" if i > 0 => format!("-{}", arg),
            _ => arg,
        })
        .collect()
}

/// `syntax-server 0.4.0 (rev: abc1234)`
pub fn version_line() -> String {
    format!("{} {} (rev: {})", crate::NAME, crate::VERSION, crate::REVISION)
}
