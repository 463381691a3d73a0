//! # Directive Regex Patterns
//!
//! One compiled pattern per directive the startup-script parser knows.
//!
//! ## Pattern Naming Convention
//!
//! - `*_SINGLE_RE` - Single-quoted version
//! - `*_DOUBLE_RE` - Double-quoted version
//! - `*_START_RE` / `*_END_RE` - Boundaries of a multi-line construct
//!
//! All patterns tolerate leading whitespace. Patterns for directives the
//! serializer rewrites are anchored at the end of the line, so a line with
//! trailing content (a comment, a second command) is left unclassified and
//! survives a save verbatim. `EXPORT_RE` cannot tell a bare value from
//! trailing words on its own; `classify` rejects those values.
//!
//! ## Regex Notes
//!
//! Rust's `regex` crate does not support backreferences, so single-quoted
//! and double-quoted variants are separate patterns.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Matches single-quoted alias: `alias name='value'`
    ///
    /// Captures:
    /// - Group 1: alias name (word characters)
    /// - Group 2: alias value
    pub static ref ALIAS_SINGLE_RE: Regex = Regex::new(
        r#"^\s*alias\s+(\w+)='(.*)'\s*$"#
    ).unwrap();

    /// Matches double-quoted alias: `alias name="value"`
    pub static ref ALIAS_DOUBLE_RE: Regex = Regex::new(
        r#"^\s*alias\s+(\w+)="(.*)"\s*$"#
    ).unwrap();

    /// Matches export statement: `export VAR=value`, `export VAR="value"`
    ///
    /// Captures:
    /// - Group 1: variable name
    /// - Group 2: raw value, quotes included
    pub static ref EXPORT_RE: Regex = Regex::new(
        r#"^\s*export\s+(\w+)=(.+?)\s*$"#
    ).unwrap();

    /// Matches the Oh My Zsh theme: `ZSH_THEME="name"` or `ZSH_THEME='name'`
    ///
    /// Captures group 1 (double-quoted) or group 2 (single-quoted).
    pub static ref THEME_RE: Regex = Regex::new(
        r#"^\s*ZSH_THEME=(?:"([^"]+)"|'([^']+)')\s*$"#
    ).unwrap();

    /// Matches the plugin list: `plugins=(git docker kubectl)`
    ///
    /// Captures:
    /// - Group 1: space-delimited plugin names
    pub static ref PLUGINS_RE: Regex = Regex::new(
        r#"^\s*plugins=\((.*)\)\s*$"#
    ).unwrap();

    /// Matches the first line of a function: `name() {`, `function name() {`
    /// or `function name {`
    ///
    /// Captures:
    /// - Group 1: function name after the `function` keyword
    /// - Group 2: function name in the `name() {` form
    pub static ref FUNC_START_RE: Regex = Regex::new(
        r#"^\s*(?:function\s+(\w+)\s*(?:\(\s*\))?|(\w+)\s*\(\s*\))\s*\{"#
    ).unwrap();

    /// Matches a closing-brace line: `}` with optional indentation or comment
    pub static ref FUNC_END_RE: Regex = Regex::new(
        r#"^\s*\}\s*(?:#.*)?$"#
    ).unwrap();

    /// Matches a section header comment written on save: `# aliases`
    ///
    /// Captures:
    /// - Group 1: section label
    pub static ref SECTION_HEADER_RE: Regex = Regex::new(
        r#"^\s*#\s(ohmyzsh|exports|aliases)\s*$"#
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_single_re() {
        let caps = ALIAS_SINGLE_RE.captures("alias ll='ls -la'").unwrap();
        assert_eq!(&caps[1], "ll");
        assert_eq!(&caps[2], "ls -la");
    }

    #[test]
    fn test_alias_double_re() {
        let caps = ALIAS_DOUBLE_RE
            .captures(r#"  alias gs="git status""#)
            .unwrap();
        assert_eq!(&caps[1], "gs");
        assert_eq!(&caps[2], "git status");
    }

    #[test]
    fn test_alias_trailing_comment_not_matched() {
        assert!(ALIAS_SINGLE_RE
            .captures("alias ll='ls -la' # long list")
            .is_none());
    }

    #[test]
    fn test_export_re() {
        let caps = EXPORT_RE.captures("export EDITOR=nvim").unwrap();
        assert_eq!(&caps[1], "EDITOR");
        assert_eq!(&caps[2], "nvim");

        let caps = EXPORT_RE.captures(r#"export EDITOR="vim"  "#).unwrap();
        assert_eq!(&caps[2], r#""vim""#);

        assert!(EXPORT_RE.captures("export EDITOR=").is_none());
        assert!(EXPORT_RE.captures("export PATH").is_none());
    }

    #[test]
    fn test_theme_re() {
        let caps = THEME_RE.captures(r#"ZSH_THEME="robbyrussell""#).unwrap();
        assert_eq!(caps.get(1).map(|m| m.as_str()), Some("robbyrussell"));

        let caps = THEME_RE.captures("ZSH_THEME='agnoster'").unwrap();
        assert_eq!(caps.get(2).map(|m| m.as_str()), Some("agnoster"));

        assert!(THEME_RE.captures(r#"ZSH_THEME="""#).is_none());
    }

    #[test]
    fn test_plugins_re() {
        let caps = PLUGINS_RE.captures("plugins=(git docker kubectl)").unwrap();
        assert_eq!(&caps[1], "git docker kubectl");
        assert!(PLUGINS_RE.captures("plugins=(").is_none());
    }

    #[test]
    fn test_func_start_re() {
        let caps = FUNC_START_RE.captures("greet() {").unwrap();
        assert_eq!(&caps[2], "greet");

        let caps = FUNC_START_RE.captures("  mkcd ( ) {").unwrap();
        assert_eq!(&caps[2], "mkcd");

        let caps = FUNC_START_RE.captures("function hello() {").unwrap();
        assert_eq!(&caps[1], "hello");

        let caps = FUNC_START_RE.captures("function greet {").unwrap();
        assert_eq!(&caps[1], "greet");

        assert!(FUNC_START_RE.captures("greet()").is_none());
        assert!(FUNC_START_RE.captures("greet {").is_none());
        assert!(FUNC_START_RE.captures("function greet").is_none());
    }

    #[test]
    fn test_func_end_re() {
        assert!(FUNC_END_RE.is_match("}"));
        assert!(FUNC_END_RE.is_match("    }  "));
        assert!(FUNC_END_RE.is_match("} # end greet"));
        assert!(!FUNC_END_RE.is_match("} else {"));
        assert!(!FUNC_END_RE.is_match("echo }"));
    }

    #[test]
    fn test_section_header_re() {
        let caps = SECTION_HEADER_RE.captures("# aliases").unwrap();
        assert_eq!(&caps[1], "aliases");
        assert!(SECTION_HEADER_RE.captures("# other").is_none());
        assert!(SECTION_HEADER_RE.captures("# aliases for git").is_none());
    }
}
