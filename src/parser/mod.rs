//! # Parser Module
//!
//! Line-oriented parsing of a zsh startup script into its structured parts.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs        - This file: the main loop + ParsedConfig
//! ├── patterns.rs   - Regex patterns (ALIAS_*, EXPORT_RE, FUNC_*, ...)
//! ├── classify.rs   - LineKind + ordered matcher rules
//! ├── tracker.rs    - SectionTracker (current passthrough section)
//! └── function.rs   - FunctionCollector (multi-line function bodies)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zshcfg::parser::parse;
//!
//! let parsed = parse("alias ll='ls -la'\nplugins=(git docker)\n");
//! assert_eq!(parsed.aliases.get("ll"), Some("ls -la"));
//! assert_eq!(parsed.plugins, vec!["git", "docker"]);
//! ```
//!
//! ## How to Modify
//!
//! ### Adding a new directive
//!
//! 1. Add a regex to `patterns.rs`
//! 2. Add a `LineKind` variant and a matcher to `RULES` in `classify.rs`
//! 3. Store the result in the match below and in `ShellConfig`

pub mod classify;
pub mod function;
pub mod patterns;
pub mod tracker;

pub use classify::{classify, LineKind};
pub use function::FunctionCollector;
pub use tracker::SectionTracker;

use std::collections::BTreeMap;

use crate::logging::Logger;
use crate::model::{EntryMap, ParseWarning, Section};

/// Everything recovered from one script.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParsedConfig {
    pub aliases: EntryMap,
    pub exports: EntryMap,
    pub theme: String,
    pub plugins: Vec<String>,
    pub custom_functions: Vec<String>,
    pub raw_sections: BTreeMap<Section, Vec<String>>,
    pub warnings: Vec<ParseWarning>,
}

/// Parse script content without logging.
pub fn parse(content: &str) -> ParsedConfig {
    parse_with(content, &Logger::disabled())
}

/// Parse script content, reporting recognised directives to `logger`.
pub fn parse_with(content: &str, logger: &Logger) -> ParsedConfig {
    let mut parsed = ParsedConfig::default();
    let mut tracker = SectionTracker::new();
    let mut collector = FunctionCollector::new();
    let mut header_lines: Vec<(Section, String)> = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_number = idx + 1;

        // Function bodies swallow every line, blanks and comments included
        if collector.is_collecting() {
            if let Some(text) = collector.push(line) {
                logger.debug(format_args!("Found function ending at line {}", line_number));
                parsed.custom_functions.push(text);
            }
            continue;
        }

        let kind = classify(line);
        match &kind {
            LineKind::Alias { name, value } => {
                logger.debug(format_args!("Found alias: {} = {}", name, value));
                if parsed.aliases.insert(name.as_str(), value.as_str()).is_some() {
                    parsed.warnings.push(ParseWarning::new(
                        line_number,
                        format!("alias '{}' redefined, later value wins", name),
                        line,
                    ));
                }
            }
            LineKind::Export { name, value } => {
                logger.debug(format_args!("Found export: {} = {}", name, value));
                if parsed.exports.insert(name.as_str(), value.as_str()).is_some() {
                    parsed.warnings.push(ParseWarning::new(
                        line_number,
                        format!("export '{}' redefined, later value wins", name),
                        line,
                    ));
                }
            }
            LineKind::Theme(theme) => {
                logger.debug(format_args!("Found theme: {}", theme));
                if !parsed.theme.is_empty() && parsed.theme != *theme {
                    parsed.warnings.push(ParseWarning::new(
                        line_number,
                        format!("ZSH_THEME redefined, '{}' replaces '{}'", theme, parsed.theme),
                        line,
                    ));
                }
                parsed.theme = theme.clone();
            }
            LineKind::Plugins(plugins) => {
                logger.debug(format_args!("Found plugins: {:?}", plugins));
                parsed.plugins = plugins.clone();
            }
            LineKind::FunctionStart(name) => {
                if let Some(text) = collector.start(name, line_number, line) {
                    parsed.custom_functions.push(text);
                }
            }
            LineKind::SectionHeader(section) => {
                header_lines.push((*section, line.to_string()));
            }
            LineKind::FunctionEnd | LineKind::BlankOrComment | LineKind::Unclassified => {
                parsed
                    .raw_sections
                    .entry(tracker.current())
                    .or_default()
                    .push(line.to_string());
            }
        }
        tracker.observe(&kind);
    }

    if let Some(open) = collector.finish() {
        let warning = ParseWarning::new(
            open.start_line,
            format!(
                "function '{}' is never closed, kept as plain lines",
                open.name
            ),
            open.lines.first().cloned().unwrap_or_default(),
        );
        parsed.warnings.push(warning);
        parsed
            .raw_sections
            .entry(tracker.current())
            .or_default()
            .extend(open.lines);
    }

    trim_blank_edges(&mut parsed.raw_sections);

    // A header comment that opened nothing is kept as the section's only line.
    for (section, line) in header_lines {
        parsed.raw_sections.entry(section).or_insert_with(|| vec![line]);
    }
    parsed
}

/// Drop blank lines at both ends of every section, and empty sections.
///
/// The serializer separates blocks with blank lines; trimming them here
/// keeps repeated load/save cycles from growing the file.
fn trim_blank_edges(sections: &mut BTreeMap<Section, Vec<String>>) {
    for lines in sections.values_mut() {
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        let leading = lines.iter().take_while(|l| l.trim().is_empty()).count();
        lines.drain(..leading);
    }
    sections.retain(|_, lines| !lines.is_empty());
}
