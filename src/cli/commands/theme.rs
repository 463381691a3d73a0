//! Theme command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Show, set or unset `ZSH_THEME`.
pub fn execute(ctx: &mut Context, name: Option<&str>, unset: bool) -> Result<()> {
    if unset {
        if ctx.config.theme.is_empty() {
            ctx.print_warning("No theme is set");
            return Ok(());
        }
        ctx.config.theme.clear();
        ctx.save()?;
        ctx.print_success("Removed ZSH_THEME");
        ctx.print_reload_hint();
        return Ok(());
    }

    let Some(name) = name else {
        if ctx.config.theme.is_empty() {
            println!("{}", "(no theme set)".dimmed());
        } else {
            println!("{}", ctx.config.theme);
        }
        return Ok(());
    };

    if name.is_empty() || name.contains('"') {
        anyhow::bail!("Invalid theme name '{}'", name);
    }
    if !ctx.config.available_themes().iter().any(|t| t == name) {
        ctx.print_warning(&format!(
            "Theme '{}' is not installed in {}",
            name,
            ctx.config.oh_my_zsh_dir.display()
        ));
    }

    ctx.config.theme = name.to_string();
    ctx.save()?;
    ctx.print_success(&format!("Theme set to '{}'", name.cyan()));
    ctx.print_reload_hint();

    Ok(())
}
