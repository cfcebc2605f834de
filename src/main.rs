use std::io::{self, BufWriter};

use anyhow::{Context, Result};

use syntax_server::cli::{self, CliArgs};
use syntax_server::{LanguageRegistry, Server, ServerConfig};

fn main() -> Result<()> {
    let args = CliArgs::from_env();

    if args.version {
        println!("{}", cli::version_line());
        return Ok(());
    }

    syntax_server::tracing::init(args.debug);
    tracing::info!("Starting {}", cli::version_line());

    let config = ServerConfig::load();
    let registry = LanguageRegistry::with_config(&config);
    tracing::debug!("Serving {} languages", registry.languages().count());

    let stdin = io::stdin();
    let stdout = io::stdout();
    Server::new(&registry)
        .serve(stdin.lock(), BufWriter::new(stdout.lock()))
        .context("Request loop failed")?;

    Ok(())
}
