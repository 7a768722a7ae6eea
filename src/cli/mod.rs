//! Command-line interface for the KODKAFA hello plugin
//!
//! One required option, `--name`. Missing or unknown arguments are usage
//! errors reported by clap on stderr with exit status 2.

use anyhow::Result;
use clap::Parser;
use clap::builder::NonEmptyStringValueParser;

mod output;

pub use output::Output;

use crate::banner::Banner;
use crate::config::BannerConfig;

/// Print a KODKAFA greeting banner
#[derive(Parser, Debug)]
#[command(name = "kodkafa-hello", version, about, long_about = None)]
pub struct Cli {
    /// Name to greet
    #[arg(long, value_name = "NAME", value_parser = NonEmptyStringValueParser::new())]
    pub name: String,
}

impl Cli {
    /// Render the banner for the parsed name and write it to stdout
    pub fn run(self) -> Result<()> {
        setup_logging();
        tracing::debug!("Greeting name of {} bytes", self.name.len());

        let config = BannerConfig::load()?;
        let banner = Banner::new(&config, &self.name);
        Output::stdout().banner(&banner)
    }
}

fn setup_logging() {
    // Diagnostics go to stderr so stdout carries only the banner
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
