// Allow common clippy pedantic lints
#![allow(clippy::must_use_candidate)]
#![allow(clippy::unused_async)]

//! onecli
//!
//! Command-line interface for the OneLogin API

use clap::Parser;
use onecli::cli::{Cli, Runner};
use onecli::config::ENV_DEBUG;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Log to stderr so rendered output on stdout stays clean
fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    let mut filter = EnvFilter::from_default_env().add_directive(level.into());
    if std::env::var(ENV_DEBUG).is_ok_and(|v| !v.trim().is_empty()) {
        if let Ok(directive) = "onecli::http=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
