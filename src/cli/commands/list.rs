//! List command implementation with table-style output

use anyhow::Result;
use colored::Colorize;

use crate::cli::args::CategoryArg;
use crate::cli::Context;
use crate::model::{EntryMap, ShellConfig};

/// One table row: kind, name, value.
struct Row {
    kind: &'static str,
    name: String,
    value: String,
}

impl Row {
    fn new(kind: &'static str, name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Get terminal width, defaulting to 80 if unable to detect
fn get_terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Split the terminal width between the name and value columns
fn calculate_column_widths(term_width: usize) -> (usize, usize, usize) {
    // "│ " prefix, " │" suffix and two column gaps
    let fixed_overhead = 6;
    let kind_width = 9;

    let available = term_width.saturating_sub(fixed_overhead + kind_width);
    let name_width = (available * 30 / 100).clamp(10, 25);
    let value_width = available.saturating_sub(name_width + 1).max(10);

    (kind_width, name_width, value_width)
}

/// Truncate a string to fit within max_width, adding "..." if truncated
fn truncate_value(s: &str, max_width: usize) -> String {
    let s = s.replace('\n', "\\n");

    if s.chars().count() <= max_width {
        s
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

fn ordered<'a>(config: &ShellConfig, map: &'a EntryMap) -> Vec<(&'a str, &'a str)> {
    if config.format.sort_alphabetically {
        map.sorted()
    } else {
        map.iter().collect()
    }
}

fn collect_rows(config: &ShellConfig, category: Option<CategoryArg>) -> Vec<Row> {
    let wants = |c: CategoryArg| category.is_none() || category == Some(c);
    let mut rows = Vec::new();

    if wants(CategoryArg::Theme) && !config.theme.is_empty() {
        rows.push(Row::new("theme", "ZSH_THEME", config.theme.clone()));
    }
    if wants(CategoryArg::Plugins) {
        for (idx, plugin) in config.plugins.iter().enumerate() {
            rows.push(Row::new("plugin", plugin.clone(), format!("#{}", idx + 1)));
        }
    }
    if wants(CategoryArg::Exports) {
        for (name, value) in ordered(config, &config.exports) {
            rows.push(Row::new("export", name, value));
        }
    }
    if wants(CategoryArg::Aliases) {
        for (name, value) in ordered(config, &config.aliases) {
            rows.push(Row::new("alias", name, value));
        }
    }
    if wants(CategoryArg::Functions) {
        for (text, name) in config.custom_functions.iter().zip(config.function_names()) {
            let first_body_line = text.lines().nth(1).unwrap_or("").trim();
            rows.push(Row::new("function", name.unwrap_or("?"), first_body_line));
        }
    }
    // Raw lines are only listed on request.
    if category == Some(CategoryArg::Raw) {
        for (section, lines) in &config.raw_sections {
            for line in lines.iter().filter(|l| !l.trim().is_empty()) {
                rows.push(Row::new("raw", section.label(), line.clone()));
            }
        }
    }

    rows
}

fn color_kind(kind: &str) -> colored::ColoredString {
    match kind {
        "alias" => kind.green().bold(),
        "function" => kind.blue().bold(),
        "export" => kind.yellow().bold(),
        "plugin" | "theme" => kind.magenta().bold(),
        _ => kind.white().bold(),
    }
}

/// Execute the list command
pub fn execute(ctx: &Context, category: Option<CategoryArg>) -> Result<()> {
    let config = &ctx.config;

    for warning in &config.warnings {
        ctx.print_warning(&warning.to_string());
    }

    let rows = collect_rows(config, category);
    if rows.is_empty() {
        println!("{}", "No entries found".dimmed());
        return Ok(());
    }

    let term_width = get_terminal_width();
    let (kind_w, name_w, value_w) = calculate_column_widths(term_width);
    let content_width = kind_w + 1 + name_w + 1 + value_w;

    let title = truncate_value(
        &config.file_path.display().to_string(),
        term_width.saturating_sub(6),
    );
    println!(
        "┌─ {} {}",
        title.bold(),
        "─".repeat(content_width.saturating_sub(title.chars().count() + 1)).dimmed()
    );
    println!(
        "│ {:<kind_w$} {:<name_w$} {:<value_w$} │",
        "TYPE".bold().cyan(),
        "NAME".bold().cyan(),
        "VALUE".bold().cyan(),
    );
    println!("│ {} │", "─".repeat(content_width).dimmed());

    for row in &rows {
        println!(
            "│ {:<kind_w$} {:<name_w$} {:<value_w$} │",
            color_kind(row.kind),
            truncate_value(&row.name, name_w).white(),
            truncate_value(&row.value, value_w).dimmed(),
        );
    }

    println!("└{}┘", "─".repeat(content_width + 2).dimmed());
    println!("{}", format!("Total: {} entries", rows.len()).dimmed());

    let raw_count: usize = config
        .raw_sections
        .values()
        .map(|lines| lines.iter().filter(|l| !l.trim().is_empty()).count())
        .sum();
    if category.is_none() && raw_count > 0 {
        println!(
            "{}",
            format!("{} other lines kept as-is (zshcfg list raw)", raw_count).dimmed()
        );
    }

    Ok(())
}
