//! Config command
//!
//! Show and validate newsboard configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;

use nb_core::config::Config;

use super::GlobalOpts;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration
    Validate,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, opts: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(opts, json),
        ConfigCommand::Validate => validate_config(opts),
    }
}

fn show_config(opts: &GlobalOpts, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let config_path = opts.config_path();
    let config = opts.load_config()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    if config_path.exists() {
        println!("{}", config_path.display().to_string().dimmed());
    } else {
        println!("{}", "(defaults, no config file)".dimmed());
    }
    println!();
    println!("{}", config.to_toml()?);
    println!(
        "{} {}",
        "data_dir in effect:".dimmed(),
        opts.data_dir(&config).display()
    );

    Ok(())
}

fn validate_config(opts: &GlobalOpts) -> Result<()> {
    use colored::Colorize;

    let config_path = opts.config_path();

    if !config_path.exists() {
        eprintln!(
            "{} Configuration not found. Run '{}' to create.",
            "⚠".yellow(),
            "newsboard init".cyan()
        );
        return Ok(());
    }

    let content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config: Config = match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            println!("{} Invalid TOML syntax:", "✗".red());
            println!("  {}", e);
            anyhow::bail!("Configuration has syntax errors");
        }
    };

    if let Err(e) = config.validate() {
        println!("{} {}", "✗".red(), e);
        anyhow::bail!("Configuration is invalid");
    }

    println!("{} Configuration is valid", "✓".green());
    println!("  Page size: {}", config.feed.page_size);
    println!(
        "  Banned words: {}",
        config.moderation.banned_words.len()
    );

    Ok(())
}
