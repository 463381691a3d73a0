//! Discovery of installed Oh My Zsh themes and plugins
//!
//! A missing or unreadable directory is not an error: it yields an empty
//! list and a warning in the log.

use std::path::{Path, PathBuf};

use crate::logging::Logger;
use crate::utils::path::expand_tilde;

/// File suffix of an Oh My Zsh theme.
pub const THEME_SUFFIX: &str = ".zsh-theme";

/// `$ZSH` when set, otherwise `~/.oh-my-zsh`.
pub fn default_oh_my_zsh_dir() -> PathBuf {
    match std::env::var("ZSH") {
        Ok(dir) if !dir.trim().is_empty() => expand_tilde(dir.trim()),
        _ => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".oh-my-zsh"),
    }
}

pub fn themes_dir(oh_my_zsh_dir: &Path) -> PathBuf {
    oh_my_zsh_dir.join("themes")
}

pub fn plugins_dir(oh_my_zsh_dir: &Path) -> PathBuf {
    oh_my_zsh_dir.join("plugins")
}

/// Theme names (file names with the suffix stripped), sorted.
pub fn list_themes(dir: &Path, logger: &Logger) -> Vec<String> {
    let mut themes: Vec<String> = read_entries(dir, logger)
        .into_iter()
        .filter(|(_, is_dir)| !is_dir)
        .filter_map(|(name, _)| name.strip_suffix(THEME_SUFFIX).map(String::from))
        .filter(|name| !name.is_empty())
        .collect();
    themes.sort();
    themes
}

/// Plugin names (sub-directory names), sorted.
pub fn list_plugins(dir: &Path, logger: &Logger) -> Vec<String> {
    let mut plugins: Vec<String> = read_entries(dir, logger)
        .into_iter()
        .filter(|(_, is_dir)| *is_dir)
        .map(|(name, _)| name)
        .collect();
    plugins.sort();
    plugins
}

fn read_entries(dir: &Path, logger: &Logger) -> Vec<(String, bool)> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            logger.warn(format_args!("Failed to read {}: {}", dir.display(), e));
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            (entry.file_name().to_string_lossy().to_string(), is_dir)
        })
        .collect()
}
