//! lootbuilder CLI — loot table authoring helper.
//!
//! Concatenates pool fragment files into a single loot table document
//! named after a raid level, without hand-editing JSON array syntax.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
