//! Formatter module: renders a [`ShellConfig`] back to script text

mod zsh;

pub use zsh::ZshFormatter;

use crate::model::ShellConfig;

/// Trait for startup-script formatters
pub trait Formatter {
    /// Render the whole model as script text
    fn format(&self, config: &ShellConfig) -> String;
}
