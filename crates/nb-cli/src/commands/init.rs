//! Init command
//!
//! Write a default configuration and create the data directory.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use nb_core::config::Config;

use super::GlobalOpts;

/// Arguments for the init command
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(long)]
    pub force: bool,

    /// Number of news items on the home page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Keep data next to the config instead of the platform data directory
    #[arg(long)]
    pub local: bool,
}

/// Execute the init command
pub fn execute(args: InitArgs, opts: &GlobalOpts) -> Result<()> {
    use colored::Colorize;

    let config_path = opts.config_path();
    if config_path.exists() && !args.force {
        eprintln!(
            "{} newsboard already initialized. Use --force to reinitialize.",
            "⚠".yellow()
        );
        return Ok(());
    }

    let mut config = Config::default();
    if let Some(page_size) = args.page_size {
        config.feed.page_size = page_size;
    }
    if let Some(dir) = &opts.data_dir {
        config.storage.data_dir = Some(dir.clone());
    } else if args.local {
        let base = config_path
            .parent()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        config.storage.data_dir = Some(base.join("data"));
    }
    config.validate()?;

    if let Some(parent) = config_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    fs::write(&config_path, config.to_toml()?).context("Failed to write config.toml")?;
    println!("{} Wrote {}", "✓".green(), config_path.display());

    let store_dir = opts.data_dir(&config);
    opts.open_store(&config)?;
    println!("{} Data directory {}", "✓".green(), store_dir.display());

    println!("\n{}", "Next steps:".bold());
    println!("  1. Register a user:   {}", "newsboard user add <name>".cyan());
    println!("  2. Publish news:      {}", "newsboard news add --title ... --text ...".cyan());
    println!("  3. Comment:           {}", "newsboard --user <name> comment add <news-id> --text ...".cyan());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_config_and_store() {
        let temp = TempDir::new().unwrap();
        let opts = GlobalOpts {
            config: Some(temp.path().join("cfg").join("config.toml")),
            data_dir: None,
            user: None,
        };
        let args = InitArgs {
            force: false,
            page_size: Some(5),
            local: true,
        };

        execute(args, &opts).unwrap();

        let config = Config::load(&opts.config_path()).unwrap();
        assert_eq!(config.feed.page_size, 5);
        assert_eq!(
            config.storage.data_dir,
            Some(temp.path().join("cfg").join("data"))
        );
        assert!(temp.path().join("cfg").join("data").exists());
    }
}
