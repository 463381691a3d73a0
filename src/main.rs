//! zshcfg - Zsh startup script manager

use anyhow::Result;
use clap::Parser;

use zshcfg::cli::{commands, Cli, Context};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = Context::from_cli(&cli)?;
    commands::execute(&mut ctx, &cli.command)
}
