//! Remove command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::KindArg;
use crate::cli::Context;

/// Execute the remove command
pub fn execute(ctx: &mut Context, kind: KindArg, name: &str) -> Result<()> {
    let current = match kind {
        KindArg::Alias => ctx.config.aliases.get(name).map(str::to_string),
        KindArg::Env => ctx.config.exports.get(name).map(str::to_string),
        KindArg::Plugin => ctx
            .config
            .plugins
            .iter()
            .find(|p| *p == name)
            .cloned(),
        KindArg::Func => ctx
            .config
            .find_function(name)
            .map(|idx| ctx.config.custom_functions[idx].clone()),
    };

    let Some(current) = current else {
        ctx.print_error(&format!("{} '{}' not found", kind, name));
        return Ok(());
    };

    println!("Found {} '{}' = '{}'", kind, name.cyan(), current.dimmed());
    if !ctx.confirm("Remove this entry?")? {
        println!("Cancelled.");
        return Ok(());
    }

    match kind {
        KindArg::Alias => {
            ctx.config.aliases.remove(name);
        }
        KindArg::Env => {
            ctx.config.exports.remove(name);
        }
        KindArg::Plugin => {
            ctx.config.disable_plugin(name);
        }
        KindArg::Func => {
            ctx.config.remove_function(name);
        }
    }

    ctx.save()?;
    ctx.print_success(&format!("Removed {} '{}'", kind, name));
    ctx.print_reload_hint();

    Ok(())
}
