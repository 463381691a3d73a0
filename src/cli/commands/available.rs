//! List installed themes or plugins

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::AvailableArg;
use crate::cli::Context;

pub fn execute(ctx: &Context, what: AvailableArg) -> Result<()> {
    let (names, label) = match what {
        AvailableArg::Themes => (ctx.config.available_themes(), "themes"),
        AvailableArg::Plugins => (ctx.config.available_plugins(), "plugins"),
    };

    if names.is_empty() {
        println!(
            "{}",
            format!(
                "No {} found in {}",
                label,
                ctx.config.oh_my_zsh_dir.display()
            )
            .dimmed()
        );
        return Ok(());
    }

    for name in &names {
        let active = match what {
            AvailableArg::Themes => ctx.config.theme == *name,
            AvailableArg::Plugins => ctx.config.plugins.contains(name),
        };
        if active {
            println!("{}", format!("* {}", name).green().bold());
        } else {
            println!("  {}", name);
        }
    }
    println!("{}", format!("{} {} installed", names.len(), label).dimmed());

    Ok(())
}
