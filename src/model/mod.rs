//! Core data models for zshcfg

mod entries;
mod section;
mod settings;
mod shell_config;
mod warning;

pub use entries::EntryMap;
pub use section::Section;
pub use settings::{FormatConfig, LogConfig, PathsConfig, Settings};
pub use shell_config::ShellConfig;
pub use warning::ParseWarning;
