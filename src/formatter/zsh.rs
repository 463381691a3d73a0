//! Zsh startup script formatter
//!
//! Output order is fixed, each block separated by one blank line:
//!
//! 1. Oh My Zsh (`ZSH_THEME`, `plugins=(...)`)
//! 2. exports, always double-quoted
//! 3. aliases, always single-quoted
//! 4. functions, verbatim, one block each
//! 5. raw passthrough sections, each but `other` under a `# <label>` header
//!
//! Empty blocks are left out entirely.

use super::Formatter;
use crate::model::{EntryMap, FormatConfig, ShellConfig};

/// Formatter for zsh startup scripts
#[derive(Debug, Clone, Default)]
pub struct ZshFormatter {
    sort_alphabetically: bool,
}

impl ZshFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &FormatConfig) -> Self {
        Self {
            sort_alphabetically: config.sort_alphabetically,
        }
    }

    pub fn format_alias(name: &str, value: &str) -> String {
        format!("alias {}='{}'", name, value)
    }

    pub fn format_export(name: &str, value: &str) -> String {
        format!("export {}=\"{}\"", name, value)
    }

    pub fn format_theme(theme: &str) -> String {
        format!("ZSH_THEME=\"{}\"", theme)
    }

    pub fn format_plugins(plugins: &[String]) -> String {
        format!("plugins=({})", plugins.join(" "))
    }

    fn ordered<'a>(&self, map: &'a EntryMap) -> Vec<(&'a str, &'a str)> {
        if self.sort_alphabetically {
            map.sorted()
        } else {
            map.iter().collect()
        }
    }
}

impl Formatter for ZshFormatter {
    fn format(&self, config: &ShellConfig) -> String {
        let mut blocks: Vec<String> = Vec::new();

        let mut oh_my_zsh = Vec::new();
        if !config.theme.is_empty() {
            oh_my_zsh.push(Self::format_theme(&config.theme));
        }
        if !config.plugins.is_empty() {
            oh_my_zsh.push(Self::format_plugins(&config.plugins));
        }
        if !oh_my_zsh.is_empty() {
            blocks.push(oh_my_zsh.join("\n"));
        }

        if !config.exports.is_empty() {
            let lines: Vec<String> = self
                .ordered(&config.exports)
                .into_iter()
                .map(|(name, value)| Self::format_export(name, value))
                .collect();
            blocks.push(lines.join("\n"));
        }

        if !config.aliases.is_empty() {
            let lines: Vec<String> = self
                .ordered(&config.aliases)
                .into_iter()
                .map(|(name, value)| Self::format_alias(name, value))
                .collect();
            blocks.push(lines.join("\n"));
        }

        blocks.extend(config.custom_functions.iter().cloned());

        for (section, lines) in &config.raw_sections {
            if lines.is_empty() {
                continue;
            }
            let header = section.header();
            let mut block: Vec<&str> = Vec::with_capacity(lines.len() + 1);
            if let Some(header) = header.as_deref() {
                // A section holding only its own header comment writes it once.
                if lines.first().map(|l| l.trim()) != Some(header) {
                    block.push(header);
                }
            }
            block.extend(lines.iter().map(String::as_str));
            blocks.push(block.join("\n"));
        }

        if blocks.is_empty() {
            return String::new();
        }
        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }
}
