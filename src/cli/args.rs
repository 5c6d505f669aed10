//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `sync`: Extract translatable strings and update per-locale catalogs
//! - `translate`: Look up a string in the catalogs of a directory
//! - `init`: Initialize polyglot configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SyncArgs {
    /// Base name of the catalog files, e.g. `i18n/app` for `i18n/app-de.tr` (overrides config file)
    #[arg(long)]
    pub name: Option<String>,

    /// Directory to scan recursively for source files (overrides config file)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Comma-separated target locales, e.g. "de_AT,de,es,fr" (overrides config file)
    #[arg(long)]
    pub locales: Option<String>,

    /// Name of the function marking translatable strings (overrides config file)
    #[arg(long)]
    pub marker: Option<String>,

    /// Report what would change without writing catalogs
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with status 1 if any catalog is out of date (implies --dry-run)
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct SyncCommand {
    #[command(flatten)]
    pub args: SyncArgs,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Directory searched recursively for `.tr` catalogs
    #[arg(long)]
    pub dir: PathBuf,

    /// Locale to translate into, e.g. `de` or `de_AT`
    #[arg(long)]
    pub locale: String,

    /// Source text to translate
    pub source: String,

    /// Context entry for disambiguation; repeat for several, in order
    #[arg(short, long = "context")]
    pub context: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract translatable strings and create or update the catalog of every locale
    Sync(SyncCommand),
    /// Print the translation of a string using the catalogs in a directory
    Translate(TranslateCommand),
    /// Initialize a new .polyglotrc.json configuration file
    Init,
}
