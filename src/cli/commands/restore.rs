//! Restore the script from its `.bak` backup

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

pub fn execute(ctx: &Context) -> Result<()> {
    let backup = ctx.config.backup_path();
    if !backup.exists() {
        ctx.print_error(&format!("No backup found at {}", backup.display()));
        return Ok(());
    }

    println!(
        "Restore {} from {}",
        ctx.config.file_path.display().to_string().cyan(),
        backup.display().to_string().dimmed()
    );
    if !ctx.confirm("The current content becomes the new backup. Continue?")? {
        println!("Cancelled.");
        return Ok(());
    }

    ctx.config.restore_backup()?;
    ctx.print_success(&format!("Restored {}", ctx.config.file_path.display()));
    ctx.print_reload_hint();

    Ok(())
}
