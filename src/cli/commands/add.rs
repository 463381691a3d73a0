//! Add command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::args::{AddCommands, ConflictStrategy};
use crate::cli::Context;
use crate::formatter::ZshFormatter;
use crate::parser::{classify, LineKind};

/// Execute the add command
pub fn execute(ctx: &mut Context, add_cmd: &AddCommands) -> Result<()> {
    match add_cmd {
        AddCommands::Alias { definition } => {
            let (name, value) = parse_definition(definition, "alias")?;
            ensure_reparses(
                &ZshFormatter::format_alias(&name, &value),
                LineKind::Alias {
                    name: name.clone(),
                    value: value.clone(),
                },
            )?;
            let existing = ctx.config.aliases.get(&name).map(str::to_string);
            if !resolve_conflict(ctx, "alias", &name, existing.as_deref(), &value)? {
                return Ok(());
            }
            ctx.config.aliases.insert(name.clone(), value.clone());
            ctx.save()?;
            ctx.print_success(&format!("Added alias '{}' = '{}'", name.cyan(), value));
        }
        AddCommands::Env { definition } => {
            let (name, value) = parse_definition(definition, "env")?;
            ensure_reparses(
                &ZshFormatter::format_export(&name, &value),
                LineKind::Export {
                    name: name.clone(),
                    value: value.clone(),
                },
            )?;
            let existing = ctx.config.exports.get(&name).map(str::to_string);
            if !resolve_conflict(ctx, "export", &name, existing.as_deref(), &value)? {
                return Ok(());
            }
            ctx.config.exports.insert(name.clone(), value.clone());
            ctx.save()?;
            ctx.print_success(&format!("Added export '{}' = '{}'", name.cyan(), value));
        }
        AddCommands::Plugin { name } => {
            if name.is_empty() || name.chars().any(|c| c.is_whitespace() || c == ')') {
                anyhow::bail!("Invalid plugin name '{}'", name);
            }
            if !ctx.config.available_plugins().contains(name) {
                ctx.print_warning(&format!(
                    "Plugin '{}' is not installed in {}",
                    name,
                    ctx.config.oh_my_zsh_dir.display()
                ));
            }
            if !ctx.config.enable_plugin(name) {
                ctx.print_warning(&format!("Plugin '{}' is already enabled", name));
                return Ok(());
            }
            ctx.save()?;
            ctx.print_success(&format!("Enabled plugin '{}'", name.cyan()));
        }
        AddCommands::Func { name, body } => {
            if !is_identifier(name) {
                anyhow::bail!("Invalid function name '{}'", name);
            }
            if body.contains('{') || body.contains('}') {
                anyhow::bail!("Function body must not contain braces");
            }
            let existing = ctx
                .config
                .find_function(name)
                .map(|idx| ctx.config.custom_functions[idx].clone());
            if !resolve_conflict(ctx, "function", name, existing.as_deref(), body)? {
                return Ok(());
            }
            ctx.config.set_function(name, body);
            ctx.save()?;
            ctx.print_success(&format!("Added function '{}'", name.cyan()));
        }
    }

    ctx.print_reload_hint();
    Ok(())
}

/// Decide whether to overwrite an existing entry. `Ok(false)` means leave it.
fn resolve_conflict(
    ctx: &Context,
    kind: &str,
    name: &str,
    existing: Option<&str>,
    new_value: &str,
) -> Result<bool> {
    let Some(existing) = existing else {
        return Ok(true);
    };
    if existing == new_value {
        ctx.print_warning(&format!("{} '{}' is already set to that value", kind, name));
        return Ok(false);
    }

    let overwrite = match ctx.on_conflict {
        ConflictStrategy::Skip => {
            ctx.print_warning(&format!("{} '{}' already exists, skipping", kind, name));
            return Ok(false);
        }
        ConflictStrategy::Overwrite => true,
        ConflictStrategy::Ask if ctx.assume_yes => true,
        ConflictStrategy::Ask => {
            println!(
                "{} '{}' already exists with value: {}",
                kind,
                name.cyan(),
                existing.dimmed()
            );
            Confirm::new()
                .with_prompt("Overwrite?")
                .default(false)
                .interact()?
        }
    };

    if !overwrite {
        println!("Skipped.");
    }
    Ok(overwrite)
}

/// Split `NAME=VALUE`, dropping one layer of surrounding quotes from the value.
fn parse_definition(definition: &str, kind: &str) -> Result<(String, String)> {
    let Some((name, value)) = definition.split_once('=') else {
        anyhow::bail!("Invalid {} format. Use: NAME=VALUE", kind);
    };

    let name = name.trim();
    if !is_identifier(name) {
        anyhow::bail!("Invalid {} name '{}'", kind, name);
    }

    let value = value.trim();
    let value = ['\'', '"']
        .iter()
        .find_map(|q| {
            value
                .strip_prefix(*q)
                .and_then(|v| v.strip_suffix(*q))
        })
        .unwrap_or(value);

    Ok((name.to_string(), value.to_string()))
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_')
}

/// Refuse values that would not read back as the same entry.
fn ensure_reparses(line: &str, expected: LineKind) -> Result<()> {
    if classify(line) != expected {
        anyhow::bail!("'{}' cannot be stored without changing its meaning", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_definition_strips_quotes() {
        let (name, value) = parse_definition("ll='ls -la'", "alias").unwrap();
        assert_eq!(name, "ll");
        assert_eq!(value, "ls -la");

        let (_, value) = parse_definition("EDITOR=\"vim\"", "env").unwrap();
        assert_eq!(value, "vim");

        let (_, value) = parse_definition("X=a=b", "env").unwrap();
        assert_eq!(value, "a=b");
    }

    #[test]
    fn test_parse_definition_rejects_bad_input() {
        assert!(parse_definition("novalue", "alias").is_err());
        assert!(parse_definition("bad name=x", "alias").is_err());
        assert!(parse_definition("=x", "alias").is_err());
    }

    #[test]
    fn test_ensure_reparses() {
        assert!(ensure_reparses(
            &ZshFormatter::format_alias("g", "git"),
            LineKind::Alias {
                name: "g".into(),
                value: "git".into()
            }
        )
        .is_ok());
        assert!(ensure_reparses(
            &ZshFormatter::format_alias("q", "echo 'hi'"),
            LineKind::Alias {
                name: "q".into(),
                value: "echo 'hi'".into()
            }
        )
        .is_err());
    }
}
