//! Configuration commands

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use artcat_sdk::SdkConfig;

use crate::config::CliConfig;
use crate::context::Context;
use crate::output::{print_field, print_section};

/// Configuration management commands
#[derive(Debug, Args)]
pub struct ConfigCommands {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Show the active configuration
    Show,

    /// Set the API base URL
    SetUrl {
        /// Base URL of the catalog API
        url: String,
    },

    /// Set the request timeout in seconds
    SetTimeout {
        /// Timeout in seconds
        seconds: u64,
    },
}

/// Execute configuration commands
pub async fn execute(ctx: &Context, cmd: ConfigCommands) -> Result<()> {
    match cmd.command {
        ConfigSubcommand::Show => show(ctx),
        ConfigSubcommand::SetUrl { url } => set_url(ctx, url),
        ConfigSubcommand::SetTimeout { seconds } => set_timeout(ctx, seconds),
    }
}

fn show(ctx: &Context) -> Result<()> {
    print_section("Configuration");
    print_field("API URL", ctx.api_url());
    print_field(
        "Timeout",
        &format!("{}s", ctx.config.settings.timeout_secs),
    );
    if let Ok(path) = CliConfig::config_path() {
        print_field("Config file", &path.display().to_string());
    }
    Ok(())
}

fn set_url(ctx: &Context, url: String) -> Result<()> {
    SdkConfig::new(&url)
        .validate()
        .context("Invalid API URL")?;

    let mut config = CliConfig::load().unwrap_or_default();
    config.api_url = Some(url.clone());
    config.save()?;

    ctx.output.success(&format!("API URL set to {}", url));
    Ok(())
}

fn set_timeout(ctx: &Context, seconds: u64) -> Result<()> {
    let mut config = CliConfig::load().unwrap_or_default();
    config.settings.timeout_secs = seconds;
    config.save()?;

    ctx.output.success(&format!("Timeout set to {}s", seconds));
    Ok(())
}
