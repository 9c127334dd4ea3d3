//! Command-line interface for duopane.
//!
//! Flags override the matching config file options for one run; the
//! `init-config` and `config-path` subcommands exit without starting the shell.

use crate::config::{AcquireMode, Config, LogLevel};
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// duopane - A headless split-pane workspace shell
#[derive(Parser, Debug)]
#[command(name = "duopane")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Load configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum number of editors that may be open at once
    #[arg(long, value_name = "N")]
    pub editor_capacity: Option<usize>,

    /// Wait for a free editor slot instead of replacing the open editor
    #[arg(long)]
    pub blocking: bool,

    /// Workspace directory for the file browser and scratch editors
    #[arg(long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Debug log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the config file location
    ConfigPath,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// Explicit config file
    pub config_path: Option<PathBuf>,
    /// Editor pool capacity override
    pub editor_capacity: Option<usize>,
    /// Force blocking acquire
    pub blocking: bool,
    /// Workspace directory override
    pub workspace: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
}

impl RuntimeOptions {
    /// Layer these options over `config`
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(capacity) = self.editor_capacity {
            config.editor_capacity = capacity;
        }
        if self.blocking {
            config.acquire_mode = AcquireMode::Blocking;
        }
        if let Some(dir) = &self.workspace {
            config.workspace_dir = Some(dir.clone());
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }

    /// Load the config named by `--config`, or the default one
    pub fn load_config(&self) -> Result<Config> {
        match &self.config_path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            config_path: cli.config,
            editor_capacity: cli.editor_capacity,
            blocking: cli.blocking,
            workspace: cli.workspace,
            log_level: cli.log_level,
        }
    }
}

/// Result of CLI processing
pub enum CliResult {
    /// Continue with normal startup
    Continue(RuntimeOptions),
    /// Exit with the given code (subcommand completed)
    Exit(i32),
}

/// Process CLI arguments and handle subcommands
pub fn process_cli() -> CliResult {
    process(Cli::parse())
}

fn process(mut cli: Cli) -> CliResult {
    match cli.command.take() {
        Some(Commands::InitConfig { force }) => {
            let path = cli.config.clone().unwrap_or_else(Config::config_path);
            match init_config(&path, force) {
                Ok(()) => {
                    println!("Wrote default config to {}", path.display());
                    CliResult::Exit(0)
                }
                Err(e) => {
                    eprintln!("Error: {:#}", e);
                    CliResult::Exit(1)
                }
            }
        }
        Some(Commands::ConfigPath) => {
            println!("{}", Config::config_path().display());
            CliResult::Exit(0)
        }
        None => CliResult::Continue(cli.into()),
    }
}

fn init_config(path: &std::path::Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default().save_to(path)
}
