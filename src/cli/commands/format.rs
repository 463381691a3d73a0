//! Format command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Execute the format command
pub fn execute(ctx: &Context, dry_run: bool) -> Result<()> {
    let formatted = ctx.config.render();
    let current = std::fs::read_to_string(&ctx.config.file_path).unwrap_or_default();

    if formatted == current {
        ctx.print_success("File is already formatted");
        return Ok(());
    }

    if dry_run {
        println!("{}", "Dry run - showing formatted output:".yellow().bold());
        println!();
        println!("{}", "─".repeat(60).dimmed());
        print!("{}", formatted);
        println!("{}", "─".repeat(60).dimmed());
        println!();
        println!(
            "{}",
            format!(
                "Current: {} lines, Formatted: {} lines",
                current.lines().count(),
                formatted.lines().count()
            )
            .dimmed()
        );
        return Ok(());
    }

    ctx.save()?;
    ctx.print_success("File formatted");
    ctx.print_reload_hint();

    Ok(())
}
