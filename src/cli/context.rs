//! Command execution context

use anyhow::{Context as _, Result};
use colored::Colorize;
use dialoguer::Confirm;
use log::LevelFilter;

use crate::cli::args::{Cli, ConflictStrategy};
use crate::logging::{self, Logger};
use crate::model::{Settings, ShellConfig};
use crate::persist::BackupStatus;
use crate::utils::path::normalize_path;

/// Common context for command execution
pub struct Context {
    pub config: ShellConfig,
    pub on_conflict: ConflictStrategy,
    pub assume_yes: bool,
}

impl Context {
    /// Load settings, install the terminal logger and parse the script.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let settings = Settings::load()?;

        let level = match cli.verbose {
            0 => settings.log.level_filter(),
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        // Fails only if a logger is already installed.
        let _ = logging::init_terminal(level);

        let mut config = ShellConfig::from_settings(&settings).with_logger(Logger::new(level));
        if let Some(file) = &cli.file {
            config.file_path = normalize_path(&file.to_string_lossy());
        }
        config
            .load()
            .with_context(|| format!("Cannot load {}", config.file_path.display()))?;

        Ok(Self {
            config,
            on_conflict: cli.on_conflict,
            assume_yes: cli.yes,
        })
    }

    /// Ask a yes/no question unless `--yes` was given.
    pub fn confirm(&self, prompt: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
    }

    /// Save the model and report what happened to the previous file.
    pub fn save(&self) -> Result<()> {
        let report = self.config.save()?;
        match &report.backup {
            BackupStatus::Created(path) => {
                println!("{}", format!("Backup: {}", path.display()).dimmed());
            }
            BackupStatus::NoPrevious => {}
            BackupStatus::Failed(reason) => {
                self.print_warning(&format!("Saved without a backup: {}", reason));
            }
        }
        Ok(())
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print reload hint after modifying the script
    pub fn print_reload_hint(&self) {
        let reload_cmd = format!("source {}", self.config.file_path.display());
        println!(
            "{} {}",
            "→".cyan(),
            format!("Run '{}' to apply changes", reload_cmd).dimmed()
        );
    }
}
