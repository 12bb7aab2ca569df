//! artcat binary entry point

mod cli;
mod commands;
mod config;
mod context;
mod output;
mod render;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::context::Context;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let ctx = Context::new(&args)?;

    let result = match args.command {
        Command::Browse => commands::browse::execute(&ctx).await,
        Command::Stats => commands::stats::execute(&ctx).await,
        Command::Heritage => commands::heritage::execute(&ctx).await,
        Command::Config(cmd) => commands::config::execute(&ctx, cmd).await,
    };

    if let Err(ref err) = result {
        ctx.output.error(&format!("{err:#}"));
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "artcat=debug,artcat_sdk=debug,artcat_core=debug"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
