//! CLI argument definitions using Clap

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "zshcfg")]
#[command(about = "Zsh startup script manager - edit ~/.zshrc without losing anything")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Startup script to manage (default: ~/.zshrc or the settings file)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// What to do when an alias or export already exists
    #[arg(long, global = true, default_value = "ask")]
    pub on_conflict: ConflictStrategy,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List parsed entries
    #[command(visible_alias = "ls")]
    List {
        /// Category: aliases|exports|functions|plugins|theme|raw (a/e/f/p/t/r)
        category: Option<CategoryArg>,
    },

    /// Add or replace an entry
    Add {
        #[command(subcommand)]
        add_command: AddCommands,
    },

    /// Remove an entry
    #[command(visible_alias = "rm")]
    Remove {
        /// Entry kind: alias|env|plugin|func (a/e/p/f)
        kind: KindArg,
        /// Entry name
        name: String,
    },

    /// Show or change the Oh My Zsh theme
    Theme {
        /// New theme name
        name: Option<String>,
        /// Remove the ZSH_THEME line
        #[arg(long, conflicts_with = "name")]
        unset: bool,
    },

    /// Edit the exported PATH
    Path {
        #[command(subcommand)]
        path_command: PathCommands,
    },

    /// List themes or plugins installed in the Oh My Zsh directory
    Available {
        /// themes|plugins
        what: AvailableArg,
    },

    /// Report parse warnings
    Check,

    /// Rewrite the script in canonical form
    Format {
        /// Print the result without writing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Swap the script with its .bak backup
    Restore,
}

#[derive(Subcommand)]
pub enum AddCommands {
    /// Add alias
    #[command(visible_alias = "a")]
    Alias {
        /// NAME=VALUE format
        definition: String,
    },
    /// Add exported variable
    #[command(visible_alias = "e")]
    Env {
        /// NAME=VALUE format
        definition: String,
    },
    /// Enable an Oh My Zsh plugin
    #[command(visible_alias = "p")]
    Plugin {
        /// Plugin name
        name: String,
    },
    /// Add function
    #[command(visible_alias = "f")]
    Func {
        /// Function name
        name: String,
        /// Function body (one command per line)
        body: String,
    },
}

#[derive(Subcommand)]
pub enum PathCommands {
    /// List PATH directories
    List,
    /// Add a directory
    Add {
        dir: String,
        /// Put it first instead of last
        #[arg(long)]
        prepend: bool,
    },
    /// Remove a directory
    Remove { dir: String },
    /// Move a directory one place earlier or later
    Move {
        dir: String,
        /// Earlier in the search order
        #[arg(long, conflicts_with = "down", required_unless_present = "down")]
        up: bool,
        /// Later in the search order
        #[arg(long)]
        down: bool,
    },
}

#[derive(Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum CategoryArg {
    #[value(alias = "a", alias = "alias")]
    Aliases,
    #[value(alias = "e", alias = "env")]
    Exports,
    #[value(alias = "f", alias = "func")]
    Functions,
    #[value(alias = "p")]
    Plugins,
    #[value(alias = "t")]
    Theme,
    #[value(alias = "r")]
    Raw,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    #[value(alias = "a")]
    Alias,
    #[value(alias = "e", alias = "export")]
    Env,
    #[value(alias = "p")]
    Plugin,
    #[value(alias = "f", alias = "function")]
    Func,
}

impl std::fmt::Display for KindArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KindArg::Alias => "alias",
            KindArg::Env => "export",
            KindArg::Plugin => "plugin",
            KindArg::Func => "function",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AvailableArg {
    Themes,
    Plugins,
}

#[derive(Clone, Copy, ValueEnum, Default)]
pub enum ConflictStrategy {
    #[default]
    Ask,
    Skip,
    Overwrite,
}
