//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod comment;
pub mod config;
pub mod init;
pub mod news;
pub mod user;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use nb_core::config::{Config, DEFAULT_CONFIG_PATH};
use nb_core::store::Store;
use nb_core::{Actor, NewsSite, Response};
use nb_storage::JsonFileStore;

/// newsboard - news feed with moderated comments
#[derive(Debug, Parser)]
#[command(name = "newsboard")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Data directory (overrides the config file)
    #[arg(long, global = true, env = "NEWSBOARD_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Act as this registered user (anonymous when omitted)
    #[arg(short, long, global = true, env = "NEWSBOARD_USER")]
    pub user: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize newsboard in the current directory
    Init(init::InitArgs),

    /// Manage users
    #[command(subcommand)]
    User(user::UserCommand),

    /// Publish and read news
    #[command(subcommand)]
    News(news::NewsCommand),

    /// Post, edit, and delete comments
    #[command(subcommand)]
    Comment(comment::CommentCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct GlobalOpts {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub user: Option<String>,
}

impl GlobalOpts {
    /// Config file in effect
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
    }

    /// Load the config, or defaults when no file exists
    pub fn load_config(&self) -> Result<Config> {
        let path = self.config_path();
        Config::load_or_default(&path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))
    }

    /// Data directory in effect: flag, then config, then the platform default
    pub fn data_dir(&self, config: &Config) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| config.storage.data_dir.clone())
            .unwrap_or_else(JsonFileStore::default_dir)
    }

    /// Open the store
    pub fn open_store(&self, config: &Config) -> Result<Arc<dyn Store>> {
        let dir = self.data_dir(config);
        let store = JsonFileStore::new(&dir)
            .with_context(|| format!("Failed to open data directory {}", dir.display()))?;
        Ok(Arc::new(store))
    }

    /// Open the site over the configured store
    pub fn open_site(&self) -> Result<NewsSite> {
        let config = self.load_config()?;
        let store = self.open_store(&config)?;
        Ok(NewsSite::with_store(store, config))
    }

    /// Resolve `--user` to a registered actor
    pub fn actor(&self, store: &dyn Store) -> Result<Option<Actor>> {
        match &self.user {
            None => Ok(None),
            Some(name) => {
                let actor = store.find_actor(name)?.with_context(|| {
                    format!("Unknown user '{}'. Run 'newsboard user add {}' first.", name, name)
                })?;
                Ok(Some(actor))
            }
        }
    }
}

/// Run the CLI application
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let opts = GlobalOpts {
        config: cli.config,
        data_dir: cli.data_dir,
        user: cli.user,
    };

    // Dispatch to command handler
    match cli.command {
        Commands::Init(args) => init::execute(args, &opts),
        Commands::User(cmd) => user::execute(cmd, &opts),
        Commands::News(cmd) => news::execute(cmd, &opts),
        Commands::Comment(cmd) => comment::execute(cmd, &opts),
        Commands::Config(cmd) => config::execute(cmd, &opts),
    }
}

/// Print the outcome of a comment request
pub fn report(response: &Response) -> Result<()> {
    use colored::Colorize;

    match response {
        Response::Redirect { location } if location.starts_with("/auth/login/") => {
            anyhow::bail!("Login required ({}). Pass --user <name>.", location)
        }
        Response::Redirect { location } => {
            println!("{} {} {}", "✓".green(), response.status_code(), location.cyan());
            Ok(())
        }
        Response::NotFound => anyhow::bail!("{} Not found", response.status_code()),
        Response::FormInvalid { errors } => {
            for (field, messages) in errors.iter() {
                for message in messages {
                    eprintln!("{} {}: {}", "✗".red(), field.bold(), message);
                }
            }
            anyhow::bail!("Comment was not saved")
        }
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
