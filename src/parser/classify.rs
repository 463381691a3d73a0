//! # Line Classifier
//!
//! Turns one line of a startup script into a [`LineKind`].
//!
//! ## Precedence
//!
//! Blank lines, section headers and comments are recognised first. Every
//! other line is offered to [`RULES`] in order and the first rule that
//! matches wins:
//!
//! | # | Rule | Example |
//! |---|------|---------|
//! | 1 | alias | `alias ll='ls -la'` |
//! | 2 | export | `export EDITOR="vim"` |
//! | 3 | theme | `ZSH_THEME="robbyrussell"` |
//! | 4 | plugins | `plugins=(git docker)` |
//! | 5 | function start | `greet() {` |
//! | 6 | function end | `}` |
//!
//! A line no rule accepts is [`LineKind::Unclassified`]. The order is part
//! of the contract: the alias, export, theme and plugin patterns can
//! overlap on unusual input.

use super::function::start_name;
use super::patterns::{
    ALIAS_DOUBLE_RE, ALIAS_SINGLE_RE, EXPORT_RE, FUNC_END_RE, PLUGINS_RE, SECTION_HEADER_RE,
    THEME_RE,
};
use crate::model::Section;

/// Tagged classification of a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Alias { name: String, value: String },
    Export { name: String, value: String },
    Theme(String),
    Plugins(Vec<String>),
    FunctionStart(String),
    FunctionEnd,
    /// A header comment written by the serializer (`# aliases`).
    SectionHeader(Section),
    BlankOrComment,
    Unclassified,
}

/// A named matcher in the precedence table.
pub struct Rule {
    pub name: &'static str,
    pub matcher: fn(&str) -> Option<LineKind>,
}

/// Ordered matcher rules, highest precedence first.
pub const RULES: &[Rule] = &[
    Rule {
        name: "alias",
        matcher: match_alias,
    },
    Rule {
        name: "export",
        matcher: match_export,
    },
    Rule {
        name: "theme",
        matcher: match_theme,
    },
    Rule {
        name: "plugins",
        matcher: match_plugins,
    },
    Rule {
        name: "function-start",
        matcher: match_function_start,
    },
    Rule {
        name: "function-end",
        matcher: match_function_end,
    },
];

/// Classify a line. Whitespace is only trimmed for matching.
pub fn classify(line: &str) -> LineKind {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return LineKind::BlankOrComment;
    }
    if let Some(caps) = SECTION_HEADER_RE.captures(line) {
        if let Ok(section) = caps[1].parse::<Section>() {
            return LineKind::SectionHeader(section);
        }
    }
    if trimmed.starts_with('#') {
        return LineKind::BlankOrComment;
    }

    RULES
        .iter()
        .find_map(|rule| (rule.matcher)(line))
        .unwrap_or(LineKind::Unclassified)
}

/// True for a line that closes a function body.
pub fn is_function_end(line: &str) -> bool {
    FUNC_END_RE.is_match(line)
}

/// Characters that end the word or change meaning in an unquoted value.
const BARE_UNSAFE: &[char] = &['#', ';', '&', '|', '<', '>', '(', ')', '\'', '"', '\\', '~'];

/// Characters a double-quoted value expands that a single-quoted one keeps.
const EXPANDED_IN_DOUBLE: &[char] = &['$', '`', '\\'];

// Aliases are always written back single-quoted, so a value that contains
// a single quote, or a double-quoted value that expands something, is left
// as a raw line.
fn match_alias(line: &str) -> Option<LineKind> {
    let (caps, quoting) = match ALIAS_SINGLE_RE.captures(line) {
        Some(caps) => (caps, Quoting::Single),
        None => (ALIAS_DOUBLE_RE.captures(line)?, Quoting::Double),
    };
    let value = &caps[2];
    if value.contains('\'') {
        return None;
    }
    if quoting == Quoting::Double && value.contains(EXPANDED_IN_DOUBLE) {
        return None;
    }
    Some(LineKind::Alias {
        name: caps[1].to_string(),
        value: value.to_string(),
    })
}

// Exports are always written back double-quoted, so only values that mean
// the same inside double quotes are accepted.
fn match_export(line: &str) -> Option<LineKind> {
    let caps = EXPORT_RE.captures(line)?;
    let (value, quoting) = unquote(&caps[2])?;
    let safe = match quoting {
        Quoting::Bare => !value.contains(|c: char| c.is_whitespace() || BARE_UNSAFE.contains(&c)),
        Quoting::Single => !value.contains(['\'', '"']) && !value.contains(EXPANDED_IN_DOUBLE),
        Quoting::Double => !value.contains('"'),
    };
    if !safe {
        return None;
    }
    Some(LineKind::Export {
        name: caps[1].to_string(),
        value: value.to_string(),
    })
}

fn match_theme(line: &str) -> Option<LineKind> {
    let caps = THEME_RE.captures(line)?;
    let theme = caps.get(1).or_else(|| caps.get(2))?;
    Some(LineKind::Theme(theme.as_str().to_string()))
}

fn match_plugins(line: &str) -> Option<LineKind> {
    let caps = PLUGINS_RE.captures(line)?;
    let plugins = caps[1].split_whitespace().map(String::from).collect();
    Some(LineKind::Plugins(plugins))
}

fn match_function_start(line: &str) -> Option<LineKind> {
    start_name(line).map(|name| LineKind::FunctionStart(name.to_string()))
}

fn match_function_end(line: &str) -> Option<LineKind> {
    is_function_end(line).then_some(LineKind::FunctionEnd)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quoting {
    Bare,
    Single,
    Double,
}

/// Strip one pair of matching surrounding quotes.
///
/// Bare values are returned as-is; a value with unbalanced surrounding
/// quotes yields `None`.
fn unquote(raw: &str) -> Option<(&str, Quoting)> {
    for (quote, quoting) in [('"', Quoting::Double), ('\'', Quoting::Single)] {
        if raw.starts_with(quote) || raw.ends_with(quote) {
            return (raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote))
                .then(|| (&raw[1..raw.len() - 1], quoting));
        }
    }
    Some((raw, Quoting::Bare))
}
