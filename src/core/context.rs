//! Immutable scan configuration, resolved once from the command line

use crate::cli::args::{Cli, OutputFormat};
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONCURRENCY: usize = 40;

#[derive(Debug, Clone)]
pub struct Context {
    pub timeout: Duration,
    pub concurrency: usize,
    pub headers: Vec<(String, String)>,
    pub output_format: OutputFormat,
    pub output_file: Option<String>,
    pub color: bool,
    pub quiet: bool,
    pub verbose: bool,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            concurrency: DEFAULT_CONCURRENCY,
            headers: Vec::new(),
            output_format: OutputFormat::Text,
            output_file: None,
            color: true,
            quiet: false,
            verbose: false,
        }
    }
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            timeout: Duration::from_secs(cli.timeout),
            // At least one worker, or nothing would drain the input.
            concurrency: cli.concurrency.max(1),
            headers: parse_headers(&cli.headers),
            output_format: cli.format,
            output_file: cli.output.clone(),
            color: !cli.no_color,
            quiet: cli.quiet,
            verbose: cli.verbose,
        }
    }

    /// Log filter for the subscriber when RUST_LOG is unset
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Parse "Name: Value" entries; anything without a colon is ignored.
pub fn parse_headers(raw: &[String]) -> Vec<(String, String)> {
    let mut headers = Vec::new();
    for header in raw {
        if let Some((key, value)) = header.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }
    headers
}
