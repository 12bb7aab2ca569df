//! CLI execution context

use std::time::Duration;

use anyhow::{Context as _, Result};
use artcat_sdk::{ArtcatClient, SdkConfig};

use crate::cli::Cli;
use crate::config::CliConfig;
use crate::output::{OutputFormat, OutputWriter};

/// Execution context for CLI commands
pub struct Context {
    /// CLI configuration
    pub config: CliConfig,

    /// Output writer
    pub output: OutputWriter,

    /// Verbose mode
    pub verbose: bool,

    /// API URL override
    api_url_override: Option<String>,

    /// Timeout override (seconds)
    timeout_override: Option<u64>,
}

impl Context {
    /// Create a new context from CLI arguments
    pub fn new(cli: &Cli) -> Result<Self> {
        let config = CliConfig::load().unwrap_or_default();
        let output = OutputWriter::new(cli.output, cli.no_color);

        Ok(Self {
            config,
            output,
            verbose: cli.verbose,
            api_url_override: cli.api_url.clone(),
            timeout_override: cli.timeout,
        })
    }

    /// Get the effective API URL
    pub fn api_url(&self) -> &str {
        self.api_url_override
            .as_deref()
            .unwrap_or_else(|| self.config.api_url())
    }

    /// The selected output format
    pub fn output_format(&self) -> OutputFormat {
        self.output.format()
    }

    /// Create an SDK client
    pub fn create_client(&self) -> Result<ArtcatClient> {
        let timeout_secs = self
            .timeout_override
            .unwrap_or(self.config.settings.timeout_secs);

        let mut config =
            SdkConfig::new(self.api_url()).with_timeout(Duration::from_secs(timeout_secs));

        if self.verbose {
            config = config.with_logging(true);
        }

        ArtcatClient::new(config).context("Failed to create API client")
    }
}
