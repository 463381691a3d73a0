//! CLI command implementations

pub mod add;
pub mod available;
pub mod check;
pub mod format;
pub mod list;
pub mod path;
pub mod remove;
pub mod restore;
pub mod theme;

use anyhow::Result;

use crate::cli::args::Commands;
use crate::cli::Context;

/// Run one parsed subcommand.
pub fn execute(ctx: &mut Context, command: &Commands) -> Result<()> {
    match command {
        Commands::List { category } => list::execute(ctx, *category),
        Commands::Add { add_command } => add::execute(ctx, add_command),
        Commands::Remove { kind, name } => remove::execute(ctx, *kind, name),
        Commands::Theme { name, unset } => theme::execute(ctx, name.as_deref(), *unset),
        Commands::Path { path_command } => path::execute(ctx, path_command),
        Commands::Available { what } => available::execute(ctx, *what),
        Commands::Check => check::execute(ctx),
        Commands::Format { dry_run } => format::execute(ctx, *dry_run),
        Commands::Restore => restore::execute(ctx),
    }
}
