//! # FunctionCollector
//!
//! Accumulates the lines of a multi-line shell function into one text block.
//!
//! ## States
//!
//! - `Idle` - not inside a function
//! - `Collecting` - between the start line (`name() {`, `function name {`)
//!   and its closing `}` line
//!
//! Every line seen while collecting is kept verbatim, including blank lines
//! and comments. The first closing-brace line ends the block; nested brace
//! groups are not tracked, so an inner `}` on its own line ends the
//! function early.
//!
//! ## Example Input
//!
//! ```bash
//! hello() {
//!     echo "Hello, World!"
//! }
//! ```

use super::classify::is_function_end;
use super::patterns::FUNC_START_RE;

#[derive(Debug, Default)]
enum State {
    #[default]
    Idle,
    Collecting {
        name: String,
        start_line: usize,
        lines: Vec<String>,
    },
}

/// Function body still open when the input ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unterminated {
    pub name: String,
    pub start_line: usize,
    pub lines: Vec<String>,
}

/// Two-state collector for function bodies.
#[derive(Debug, Default)]
pub struct FunctionCollector {
    state: State,
}

impl FunctionCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_collecting(&self) -> bool {
        matches!(self.state, State::Collecting { .. })
    }

    /// Begin collecting at a function-start line.
    ///
    /// Returns the finished text right away when the start line already
    /// closes its own braces (`greet() { echo hi; }`).
    pub fn start(&mut self, name: &str, start_line: usize, line: &str) -> Option<String> {
        if closes_on_same_line(line) {
            return Some(line.to_string());
        }
        self.state = State::Collecting {
            name: name.to_string(),
            start_line,
            lines: vec![line.to_string()],
        };
        None
    }

    /// Feed the next line while collecting.
    ///
    /// Returns the complete function text when `line` closes the body.
    pub fn push(&mut self, line: &str) -> Option<String> {
        let State::Collecting { lines, .. } = &mut self.state else {
            return None;
        };
        lines.push(line.to_string());
        if !is_function_end(line) {
            return None;
        }
        match std::mem::take(&mut self.state) {
            State::Collecting { lines, .. } => Some(lines.join("\n")),
            State::Idle => None,
        }
    }

    /// End of input. Hands back an unterminated body instead of dropping it.
    pub fn finish(self) -> Option<Unterminated> {
        match self.state {
            State::Collecting {
                name,
                start_line,
                lines,
            } => Some(Unterminated {
                name,
                start_line,
                lines,
            }),
            State::Idle => None,
        }
    }
}

/// Name declared by a function-start line, in any of its accepted forms.
pub fn start_name(line: &str) -> Option<&str> {
    let caps = FUNC_START_RE.captures(line)?;
    caps.get(1).or_else(|| caps.get(2)).map(|m| m.as_str())
}

/// Name of a collected function, taken from its first line.
pub fn function_name(text: &str) -> Option<&str> {
    start_name(text.lines().next()?)
}

fn closes_on_same_line(line: &str) -> bool {
    let (open, close) = count_braces_outside_quotes(line);
    open > 0 && close >= open
}

/// Count opening `{` and closing `}` braces outside quoted strings.
pub fn count_braces_outside_quotes(line: &str) -> (usize, usize) {
    let mut in_single_quote = false;
    let mut in_double_quote = false;
    let mut open_count = 0;
    let mut close_count = 0;

    for c in line.chars() {
        match c {
            '\'' if !in_double_quote => in_single_quote = !in_single_quote,
            '"' if !in_single_quote => in_double_quote = !in_double_quote,
            '{' if !in_single_quote && !in_double_quote => open_count += 1,
            '}' if !in_single_quote && !in_double_quote => close_count += 1,
            _ => {}
        }
    }

    (open_count, close_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_multi_line_function() {
        let mut collector = FunctionCollector::new();
        assert!(collector.start("greet", 3, "greet() {").is_none());
        assert!(collector.is_collecting());

        assert!(collector.push("    echo \"Hello\"").is_none());
        assert!(collector.push("").is_none());
        assert!(collector.push("    # trailing comment").is_none());
        let text = collector.push("}").unwrap();

        assert_eq!(
            text,
            "greet() {\n    echo \"Hello\"\n\n    # trailing comment\n}"
        );
        assert!(!collector.is_collecting());
        assert!(collector.finish().is_none());
    }

    #[test]
    fn test_single_line_function() {
        let mut collector = FunctionCollector::new();
        let text = collector.start("hi", 1, "hi() { echo hi; }");
        assert_eq!(text.as_deref(), Some("hi() { echo hi; }"));
        assert!(!collector.is_collecting());
    }

    #[test]
    fn test_inner_brace_ends_early() {
        let mut collector = FunctionCollector::new();
        collector.start("outer", 1, "outer() {");
        collector.push("  {");
        let text = collector.push("  }").unwrap();
        assert_eq!(text, "outer() {\n  {\n  }");
    }

    #[test]
    fn test_unterminated_is_returned() {
        let mut collector = FunctionCollector::new();
        collector.start("broken", 7, "broken() {");
        collector.push("  echo never closed");

        let open = collector.finish().unwrap();
        assert_eq!(open.name, "broken");
        assert_eq!(open.start_line, 7);
        assert_eq!(open.lines, vec!["broken() {", "  echo never closed"]);
    }

    #[test]
    fn test_push_while_idle_is_ignored() {
        let mut collector = FunctionCollector::new();
        assert!(collector.push("}").is_none());
        assert!(collector.finish().is_none());
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name("hello() {\n    echo hi\n}"), Some("hello"));
        assert_eq!(function_name("function mkcd() { mkdir -p $1; }"), Some("mkcd"));
        assert_eq!(function_name("function greet {\n    echo hi\n}"), Some("greet"));
        assert_eq!(function_name("echo hi"), None);
    }

    #[test]
    fn test_count_braces_outside_quotes() {
        assert_eq!(count_braces_outside_quotes("f() { echo ${x}; }"), (2, 2));
        assert_eq!(count_braces_outside_quotes("echo '{'"), (0, 0));
        assert_eq!(count_braces_outside_quotes("f() {"), (1, 0));
    }
}
