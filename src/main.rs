use anyhow::Result;
use clap::Parser;

use kodkafa_hello::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
