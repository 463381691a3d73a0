//! The in-memory model of one zsh startup script

use std::collections::BTreeMap;
use std::io;
use std::path::PathBuf;

use super::{EntryMap, FormatConfig, ParseWarning, Section, Settings};
use crate::discovery;
use crate::error::{ConfigError, Result};
use crate::formatter::{Formatter, ZshFormatter};
use crate::logging::Logger;
use crate::parser::{self, function::function_name, ParsedConfig};
use crate::persist::{self, FileOps, SaveReport, StdFileOps};
use crate::utils::path_list;

/// Structured, editable view of a startup script.
///
/// Construct with [`ShellConfig::new`], call [`load`](ShellConfig::load),
/// edit the public fields, then [`save`](ShellConfig::save). Every load
/// starts from an empty model; loads never merge.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub file_path: PathBuf,
    pub aliases: EntryMap,
    pub exports: EntryMap,
    /// Empty means unset.
    pub theme: String,
    pub plugins: Vec<String>,
    /// Complete function definitions, first line to closing brace.
    pub custom_functions: Vec<String>,
    /// Lines kept verbatim, grouped by the section they appeared in.
    pub raw_sections: BTreeMap<Section, Vec<String>>,
    /// Problems noticed during the last load.
    pub warnings: Vec<ParseWarning>,
    pub format: FormatConfig,
    pub oh_my_zsh_dir: PathBuf,
    logger: Logger,
}

impl ShellConfig {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
            aliases: EntryMap::new(),
            exports: EntryMap::new(),
            theme: String::new(),
            plugins: Vec::new(),
            custom_functions: Vec::new(),
            raw_sections: BTreeMap::new(),
            warnings: Vec::new(),
            format: FormatConfig::default(),
            oh_my_zsh_dir: discovery::default_oh_my_zsh_dir(),
            logger: Logger::default(),
        }
    }

    /// `~/.zshrc`
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(".zshrc")
    }

    /// Build from tool settings: script path, Oh My Zsh dir, format and log level.
    pub fn from_settings(settings: &Settings) -> Self {
        let mut config = Self::new(settings.paths.rc_file_path());
        config.oh_my_zsh_dir = settings.paths.oh_my_zsh_path();
        config.format = settings.format.clone();
        config.logger = Logger::new(settings.log.level_filter());
        config
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Reset every container to empty.
    pub fn clear(&mut self) {
        self.aliases.clear();
        self.exports.clear();
        self.theme.clear();
        self.plugins.clear();
        self.custom_functions.clear();
        self.raw_sections.clear();
        self.warnings.clear();
    }

    /// Replace the model with the content of [`file_path`](Self::file_path).
    ///
    /// A missing file is not an error and leaves the model empty. On a read
    /// error the model is left empty as well.
    pub fn load(&mut self) -> Result<()> {
        self.logger.debug(format_args!(
            "Loading shell config from {}",
            self.file_path.display()
        ));
        self.clear();

        let bytes = match std::fs::read(&self.file_path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                self.logger.info(format_args!(
                    "Config file does not exist: {}",
                    self.file_path.display()
                ));
                return Ok(());
            }
            Err(source) => {
                self.logger.error(format_args!(
                    "Failed to read {}: {}",
                    self.file_path.display(),
                    source
                ));
                return Err(ConfigError::Read {
                    path: self.file_path.clone(),
                    source,
                });
            }
        };

        // Saving a lossy decode would rewrite the bad bytes, so refuse instead.
        let content = match String::from_utf8(bytes) {
            Ok(content) => content,
            Err(e) => {
                let valid = e.utf8_error().valid_up_to();
                let line = e.as_bytes()[..valid].iter().filter(|b| **b == b'\n').count() + 1;
                self.logger.error(format_args!(
                    "{} is not valid UTF-8 at line {}",
                    self.file_path.display(),
                    line
                ));
                return Err(ConfigError::NotUtf8 {
                    path: self.file_path.clone(),
                    line,
                });
            }
        };

        self.load_str(&content);
        self.logger.info(format_args!(
            "Loaded config: {} aliases, {} exports, {} functions",
            self.aliases.len(),
            self.exports.len(),
            self.custom_functions.len()
        ));
        Ok(())
    }

    /// Replace the model with parsed `content` (no file access).
    pub fn load_str(&mut self, content: &str) {
        let ParsedConfig {
            aliases,
            exports,
            theme,
            plugins,
            custom_functions,
            raw_sections,
            warnings,
        } = parser::parse_with(content, &self.logger);

        for warning in &warnings {
            self.logger.warn(format_args!("{}", warning));
        }

        self.aliases = aliases;
        self.exports = exports;
        self.theme = theme;
        self.plugins = plugins;
        self.custom_functions = custom_functions;
        self.raw_sections = raw_sections;
        self.warnings = warnings;
    }

    /// Render the model as script text. Does not touch the file.
    pub fn render(&self) -> String {
        ZshFormatter::from_config(&self.format).format(self)
    }

    /// Write the rendered model to [`file_path`](Self::file_path).
    pub fn save(&self) -> Result<SaveReport> {
        self.save_with(&StdFileOps)
    }

    /// Like [`save`](Self::save) with caller-supplied file operations.
    pub fn save_with(&self, ops: &dyn FileOps) -> Result<SaveReport> {
        self.logger.debug(format_args!(
            "Saving shell config to {}",
            self.file_path.display()
        ));
        persist::persist(ops, &self.file_path, &self.render(), &self.logger)
    }

    /// `<file_path>.bak`
    pub fn backup_path(&self) -> PathBuf {
        persist::backup_path(&self.file_path)
    }

    /// Put the backup content back in place.
    ///
    /// The content being replaced becomes the new backup, so restoring
    /// twice swaps back. The in-memory model is not changed; call
    /// [`load`](Self::load) afterwards to see the restored content.
    pub fn restore_backup(&self) -> Result<SaveReport> {
        let backup = self.backup_path();
        let content = std::fs::read_to_string(&backup).map_err(|source| ConfigError::ReadBackup {
            path: backup.clone(),
            source,
        })?;
        self.logger.info(format_args!(
            "Restoring {} from {}",
            self.file_path.display(),
            backup.display()
        ));
        persist::persist(&StdFileOps, &self.file_path, &content, &self.logger)
    }

    /// Installed themes under `<oh_my_zsh_dir>/themes`.
    pub fn available_themes(&self) -> Vec<String> {
        discovery::list_themes(&discovery::themes_dir(&self.oh_my_zsh_dir), &self.logger)
    }

    /// Installed plugins under `<oh_my_zsh_dir>/plugins`.
    pub fn available_plugins(&self) -> Vec<String> {
        discovery::list_plugins(&discovery::plugins_dir(&self.oh_my_zsh_dir), &self.logger)
    }

    /// Name of each custom function, in order.
    pub fn function_names(&self) -> Vec<Option<&str>> {
        self.custom_functions
            .iter()
            .map(|text| function_name(text))
            .collect()
    }

    pub fn find_function(&self, name: &str) -> Option<usize> {
        self.custom_functions
            .iter()
            .position(|text| function_name(text) == Some(name))
    }

    /// Remove a function by name. Returns `false` if there is none.
    pub fn remove_function(&mut self, name: &str) -> bool {
        match self.find_function(name) {
            Some(idx) => {
                self.custom_functions.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Add or replace a function named `name` with the given body lines.
    pub fn set_function(&mut self, name: &str, body: &str) {
        let mut text = format!("{}() {{\n", name);
        for line in body.lines() {
            text.push_str("    ");
            text.push_str(line.trim_end());
            text.push('\n');
        }
        text.push('}');

        match self.find_function(name) {
            Some(idx) => self.custom_functions[idx] = text,
            None => self.custom_functions.push(text),
        }
    }

    /// Add a plugin at the end of the list. Returns `false` if already enabled.
    pub fn enable_plugin(&mut self, name: &str) -> bool {
        if self.plugins.iter().any(|p| p == name) {
            return false;
        }
        self.plugins.push(name.to_string());
        true
    }

    pub fn disable_plugin(&mut self, name: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|p| p != name);
        self.plugins.len() != before
    }

    /// PATH directories from the `PATH` export, or the process PATH
    /// when the script does not export one.
    pub fn path_entries(&self) -> Vec<String> {
        match self.exports.get("PATH") {
            Some(value) => path_list::split_path(value),
            None => path_list::split_path(&std::env::var("PATH").unwrap_or_default()),
        }
    }

    pub fn set_path_entries(&mut self, entries: &[String]) {
        self.exports.insert("PATH", path_list::join_path(entries));
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_new_is_empty() {
        let config = ShellConfig::new("/tmp/.zshrc");
        assert!(config.aliases.is_empty());
        assert!(config.exports.is_empty());
        assert!(config.theme.is_empty());
        assert!(config.plugins.is_empty());
        assert!(config.custom_functions.is_empty());
        assert!(config.raw_sections.is_empty());
        assert_eq!(config.file_path, PathBuf::from("/tmp/.zshrc"));
    }

    #[test]
    fn test_default_path() {
        let config = ShellConfig::default();
        assert!(config.file_path.ends_with(".zshrc"));
    }

    #[test]
    fn test_load_replaces_previous_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        std::fs::write(&path, "alias ll='ls -la'\n").unwrap();

        let mut config = ShellConfig::new(&path).with_logger(Logger::disabled());
        config.aliases.insert("stale", "x");
        config.plugins.push("old".into());
        config.load().unwrap();
        config.load().unwrap();

        assert_eq!(config.aliases.len(), 1);
        assert_eq!(config.aliases.get("ll"), Some("ls -la"));
        assert!(config.plugins.is_empty());
    }

    #[test]
    fn test_non_utf8_script_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        std::fs::write(&path, b"alias ll='ls -la'\n# caf\xe9\n").unwrap();

        let mut config = ShellConfig::new(&path).with_logger(Logger::disabled());
        let err = config.load().unwrap_err();

        assert!(matches!(err, ConfigError::NotUtf8 { line: 2, .. }));
        assert!(err.to_string().contains("not valid UTF-8"));
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_failed_load_leaves_model_empty() {
        let dir = tempdir().unwrap();
        // a directory cannot be read as a file
        let mut config = ShellConfig::new(dir.path()).with_logger(Logger::disabled());
        config.aliases.insert("ll", "ls -la");

        let err = config.load().unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(config.aliases.is_empty());
    }

    #[test]
    fn test_set_and_remove_function() {
        let mut config = ShellConfig::new("/tmp/.zshrc");
        config.set_function("mkcd", "mkdir -p \"$1\"\ncd \"$1\"");
        assert_eq!(
            config.custom_functions[0],
            "mkcd() {\n    mkdir -p \"$1\"\n    cd \"$1\"\n}"
        );

        config.set_function("mkcd", "mkdir -p \"$1\"");
        assert_eq!(config.custom_functions.len(), 1);
        assert_eq!(config.function_names(), vec![Some("mkcd")]);

        assert!(config.remove_function("mkcd"));
        assert!(!config.remove_function("mkcd"));
    }

    #[test]
    fn test_plugins_enable_disable() {
        let mut config = ShellConfig::new("/tmp/.zshrc");
        assert!(config.enable_plugin("git"));
        assert!(config.enable_plugin("docker"));
        assert!(!config.enable_plugin("git"));
        assert!(config.disable_plugin("git"));
        assert_eq!(config.plugins, vec!["docker"]);
    }

    #[test]
    fn test_path_entries_from_export() {
        let mut config = ShellConfig::new("/tmp/.zshrc");
        config.exports.insert("PATH", "/usr/local/bin:$PATH");
        assert_eq!(config.path_entries(), vec!["/usr/local/bin", "$PATH"]);

        let mut entries = config.path_entries();
        path_list::add_entry(&mut entries, "/opt/bin", true);
        config.set_path_entries(&entries);
        assert_eq!(
            config.exports.get("PATH"),
            Some("/opt/bin:/usr/local/bin:$PATH")
        );
    }

    #[test]
    fn test_restore_backup_swaps() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".zshrc");
        std::fs::write(&path, "alias old='1'\n").unwrap();

        let mut config = ShellConfig::new(&path).with_logger(Logger::disabled());
        config.load().unwrap();
        config.aliases.insert("new", "2");
        config.save().unwrap();

        config.restore_backup().unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "alias old='1'\n");
        assert!(std::fs::read_to_string(config.backup_path())
            .unwrap()
            .contains("alias new='2'"));
    }

    #[test]
    fn test_restore_without_backup() {
        let dir = tempdir().unwrap();
        let config = ShellConfig::new(dir.path().join(".zshrc")).with_logger(Logger::disabled());
        assert!(matches!(
            config.restore_backup(),
            Err(ConfigError::ReadBackup { .. })
        ));
    }
}
