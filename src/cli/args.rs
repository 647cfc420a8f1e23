use clap::{Parser, ValueEnum};

/// refxss – find reflected query parameters and the characters they let through
#[derive(Parser, Debug)]
#[command(
    name = "refxss",
    version,
    about = "refxss – reflected parameter discovery for XSS hunting",
    long_about = r#"
refxss reads URLs from standard input, one per line, and for every URL:

  • Fetches the page once and checks which query parameter values are
    echoed back in an HTML response (raw, query-escaped, or "+" for space)
  • For each reflected parameter, appends aprefix<c>asuffix for every
    character c in  " ' < > $ | ( ) ` : ; { }  and reports the characters
    that come back verbatim

Escaped URLs such as http:\/\/host\/p\?a\=1\&b\=2 are unescaped first.
Failed requests are never retried; they count as "not reflected" or
"filtered".
"#,
    after_help = r#"EXAMPLES:
  cat urls.txt | refxss
  waybackurls example.com | grep '=' | refxss -c 80 -t 5
  cat urls.txt | refxss -H "Cookie: session=abc" -H "X-Bug-Bounty: me"
  cat urls.txt | refxss --format json -o results.json
"#
)]
pub struct Cli {
    // ═══════════════════════════════════════════════════════════════════
    // REQUESTS
    // ═══════════════════════════════════════════════════════════════════

    /// Per-request timeout in seconds
    #[arg(short = 't', long, default_value_t = 10, help_heading = "REQUESTS")]
    pub timeout: u64,

    /// Number of concurrent workers
    #[arg(short = 'c', long, default_value_t = 40, help_heading = "REQUESTS")]
    pub concurrency: usize,

    /// Custom header "Name: Value" (can be used multiple times)
    #[arg(long = "header", short = 'H', help_heading = "REQUESTS")]
    pub headers: Vec<String>,

    // ═══════════════════════════════════════════════════════════════════
    // OUTPUT
    // ═══════════════════════════════════════════════════════════════════

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, help_heading = "OUTPUT")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long, help_heading = "OUTPUT")]
    pub output: Option<String>,

    /// Disable ANSI colors in the text report
    #[arg(long = "no-color", help_heading = "OUTPUT")]
    pub no_color: bool,

    /// Do not print the banner
    #[arg(long = "no-banner", help_heading = "OUTPUT")]
    pub no_banner: bool,

    /// Only log warnings and errors
    #[arg(short = 'q', long, conflicts_with = "verbose", help_heading = "OUTPUT")]
    pub quiet: bool,

    /// Log every request decision
    #[arg(short = 'v', long, help_heading = "OUTPUT")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
