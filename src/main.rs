mod cli;
mod core;
mod http;
mod payload;
mod reporting;
mod scanner;
mod xss;

use clap::Parser;
use crate::cli::args::Cli;
use crate::core::context::Context;
use crate::core::engine::Engine;
use tracing_subscriber::EnvFilter;

const BANNER: &str = r#"
           __
  _______ / _|_  _____ ___
 |  __/ -_)  _\ \ /(_-<(_-<
 |_|  \___|_| /_\_\/__//__/

  reflected parameter + special character prober
"#;

fn print_banner() {
    // stderr keeps stdout clean for piping the report
    eprintln!("\x1b[36m{}\x1b[0m", BANNER);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.no_banner && !cli.quiet {
        print_banner();
    }

    let ctx = Context::from_cli(&cli);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(ctx.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let engine = Engine::new(ctx);
    engine.run().await?;

    Ok(())
}
