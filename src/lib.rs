//! zshcfg - Zsh startup script manager
//!
//! Parses `~/.zshrc` into an editable model and writes it back safely.
//!
//! # Features
//!
//! - Aliases, exports, Oh My Zsh theme and plugin list, custom functions
//! - Unrecognised lines preserved verbatim, grouped by nearby section
//! - Deterministic output order
//! - Temp-file write, `.bak` backup and atomic rename on save
//! - Theme and plugin discovery in the Oh My Zsh installation
//!
//! # Example
//!
//! ```rust,no_run
//! use zshcfg::ShellConfig;
//!
//! let mut config = ShellConfig::default();
//! config.load()?;
//! config.aliases.insert("ll", "ls -la");
//! config.save()?;
//! # Ok::<(), zshcfg::ConfigError>(())
//! ```

pub mod cli;
pub mod discovery;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod model;
pub mod parser;
pub mod persist;
pub mod utils;

pub use error::{ConfigError, Result};
pub use formatter::{Formatter, ZshFormatter};
pub use logging::Logger;
pub use model::{EntryMap, ParseWarning, Section, Settings, ShellConfig};
pub use parser::{parse, ParsedConfig};
pub use persist::{BackupStatus, FileOps, SaveReport, StdFileOps};
