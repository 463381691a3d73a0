//! Check command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Execute the check command
pub fn execute(ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    if config.warnings.is_empty() {
        ctx.print_success("No issues found");
        println!(
            "{}",
            format!(
                "Checked {} aliases, {} exports, {} functions",
                config.aliases.len(),
                config.exports.len(),
                config.custom_functions.len()
            )
            .dimmed()
        );
        return Ok(());
    }

    println!("{}", "Parse warnings:".yellow().bold());
    for warning in &config.warnings {
        println!(
            "  {} Line {}: {}",
            "⚠".yellow(),
            warning.line_number,
            warning.message
        );
        if !warning.raw_line.is_empty() {
            println!("      {}", warning.raw_line.dimmed());
        }
    }
    println!();
    println!(
        "{}",
        format!("Found {} warning(s)", config.warnings.len()).yellow()
    );

    Ok(())
}
