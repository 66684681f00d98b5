//! User command
//!
//! Register and list users.

use anyhow::{Context, Result};
use clap::Subcommand;

use nb_core::Actor;

use super::GlobalOpts;

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// Register a user
    Add {
        /// Login name
        name: String,

        /// Mark the user as site staff
        #[arg(long)]
        staff: bool,
    },

    /// List registered users
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Execute the user command
pub fn execute(cmd: UserCommand, opts: &GlobalOpts) -> Result<()> {
    use colored::Colorize;

    let config = opts.load_config()?;
    let store = opts.open_store(&config)?;

    match cmd {
        UserCommand::Add { name, staff } => {
            let actor = if staff {
                Actor::staff(&name)
            } else {
                Actor::new(&name)
            };
            let actor = store
                .create_actor(actor)
                .with_context(|| format!("Failed to register '{}'", name))?;
            println!("{} Registered {} ({})", "✓".green(), actor.username.bold(), actor.id);
        }
        UserCommand::List { json } => {
            let actors = store.list_actors()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&actors)?);
                return Ok(());
            }
            if actors.is_empty() {
                println!("No users registered.");
            }
            for actor in actors {
                let role = if actor.is_staff { "staff" } else { "user" };
                println!("  {} {}", actor.username.green(), role.dimmed());
            }
        }
    }

    Ok(())
}
