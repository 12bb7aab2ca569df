//! Output formatting for CLI

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use console::Term;
use serde::Serialize;

use crate::render::{NavBar, PageView, RecordBlock};

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON format
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// The display surface: every page or error replaces its content wholesale.
pub struct OutputWriter {
    format: OutputFormat,
    term: Term,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self {
            format,
            term: Term::stdout(),
        }
    }

    /// The selected output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Show a rendered page, replacing whatever was on the surface.
    ///
    /// Clearing the terminal doubles as the scroll-to-top reset: the new
    /// page always starts at the top of the viewport. The navigation bar is
    /// repeated below the records, as on the page head.
    pub fn page(&self, view: &PageView) {
        self.replace_surface();

        println!(
            "{} | {}",
            view.header.title().bold(),
            view.header.summary()
        );
        self.nav(&view.nav);

        for block in &view.records {
            self.block(block);
        }

        println!();
        self.nav(&view.nav);
    }

    /// Show an inline fetch failure, replacing the surface content.
    pub fn page_error(&self, message: &str) {
        self.replace_surface();
        println!("{} {}", "✗".red(), message.red());
    }

    /// Print record blocks without touching the rest of the surface.
    pub fn blocks(&self, blocks: &[RecordBlock]) {
        for block in blocks {
            self.block(block);
        }
    }

    fn replace_surface(&self) {
        let _ = self.term.clear_screen();
    }

    fn nav(&self, nav: &NavBar) {
        let previous = nav_label("← prev [p]", nav.previous.enabled);
        let next = nav_label("next [n] →", nav.next.enabled);
        println!("{}   {}", previous, next);
    }

    fn block(&self, block: &RecordBlock) {
        println!();
        println!("{}", block.title.bold());
        for line in &block.lines {
            println!("  {}: {}", line.label.cyan(), line.value);
        }
    }

    /// Write a value as pretty JSON
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Write a success message
    pub fn success(&self, message: &str) {
        if self.format == OutputFormat::Text {
            println!("{} {}", "✓".green(), message);
        } else {
            println!("{}", message);
        }
    }

    /// Write an error message
    pub fn error(&self, message: &str) {
        if self.format == OutputFormat::Text {
            eprintln!("{} {}", "✗".red(), message);
        } else {
            eprintln!("Error: {}", message);
        }
    }

    /// Write an info message
    pub fn info(&self, message: &str) {
        if self.format == OutputFormat::Text {
            println!("{} {}", "ℹ".blue(), message);
        } else {
            println!("{}", message);
        }
    }

    /// Start a spinner for long operations
    pub fn spinner(&self, message: &str) -> Option<indicatif::ProgressBar> {
        if self.format == OutputFormat::Text {
            let pb = indicatif::ProgressBar::new_spinner();
            pb.set_style(
                indicatif::ProgressStyle::default_spinner()
                    .template("{spinner:.green} {msg}")
                    .unwrap(),
            );
            pb.set_message(message.to_string());
            pb.enable_steady_tick(std::time::Duration::from_millis(100));
            Some(pb)
        } else {
            None
        }
    }
}

fn nav_label(text: &str, enabled: bool) -> String {
    if enabled {
        text.to_string()
    } else {
        text.dimmed().to_string()
    }
}

/// Print a key-value pair in detail format
pub fn print_field(key: &str, value: &str) {
    println!("  {}: {}", key.cyan(), value);
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", title.bold().underline());
}
