//! Voronoi Maker CLI entry point

use anyhow::Result;
use clap::Parser;

use voronoi_cli::{execute, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    execute(cli)
}
