//! PATH editing commands

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::PathCommands;
use crate::cli::Context;
use crate::utils::path_list;

/// Execute a `path` subcommand
pub fn execute(ctx: &mut Context, path_cmd: &PathCommands) -> Result<()> {
    let mut entries = ctx.config.path_entries();

    match path_cmd {
        PathCommands::List => {
            if !ctx.config.exports.contains_key("PATH") {
                println!(
                    "{}",
                    "PATH is not exported by this script; showing the current environment".dimmed()
                );
            }
            for (idx, entry) in entries.iter().enumerate() {
                let shown = if path_list::is_self_reference(entry) {
                    entry.dimmed()
                } else {
                    entry.normal()
                };
                println!("{:>3}  {}", (idx + 1).to_string().dimmed(), shown);
            }
            return Ok(());
        }
        PathCommands::Add { dir, prepend } => {
            if dir.contains(':') || dir.contains('"') {
                anyhow::bail!("Invalid PATH directory '{}'", dir);
            }
            if !ctx.config.exports.contains_key("PATH") {
                // Keep the inherited PATH instead of replacing it.
                entries = vec!["$PATH".to_string()];
            }
            if !path_list::add_entry(&mut entries, dir, *prepend) {
                ctx.print_warning(&format!("'{}' is already in PATH", dir));
                return Ok(());
            }
            ctx.config.set_path_entries(&entries);
            ctx.save()?;
            ctx.print_success(&format!("Added '{}' to PATH", dir.cyan()));
        }
        PathCommands::Remove { dir } => {
            let had_self_reference = path_list::has_self_reference(&entries);
            if !ctx.config.exports.contains_key("PATH")
                || !path_list::remove_entry(&mut entries, dir)
            {
                ctx.print_error(&format!("'{}' is not in the exported PATH", dir));
                return Ok(());
            }
            if entries.is_empty() {
                anyhow::bail!("Removing '{}' would leave PATH empty", dir);
            }
            if had_self_reference && !path_list::has_self_reference(&entries) {
                ctx.print_warning("PATH will no longer include the inherited $PATH");
                if !ctx.confirm("Remove it anyway?")? {
                    println!("Cancelled.");
                    return Ok(());
                }
            }
            ctx.config.set_path_entries(&entries);
            ctx.save()?;
            ctx.print_success(&format!("Removed '{}' from PATH", dir.cyan()));
        }
        PathCommands::Move { dir, up, .. } => {
            if !ctx.config.exports.contains_key("PATH") {
                ctx.print_error("PATH is not exported by this script");
                return Ok(());
            }
            if !path_list::move_entry(&mut entries, dir, *up) {
                ctx.print_warning(&format!("'{}' cannot be moved that way", dir));
                return Ok(());
            }
            ctx.config.set_path_entries(&entries);
            ctx.save()?;
            ctx.print_success(&format!(
                "Moved '{}' {}",
                dir.cyan(),
                if *up { "up" } else { "down" }
            ));
        }
    }

    ctx.print_reload_hint();
    Ok(())
}
