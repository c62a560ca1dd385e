use anyhow::Result;
use clap::Parser;

use doclint::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.run()
}
