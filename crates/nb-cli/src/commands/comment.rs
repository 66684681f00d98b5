//! Comment command
//!
//! Post, edit, and delete comments as the `--user` given.

use anyhow::Result;
use clap::Subcommand;

use nb_core::comment::CommentForm;
use nb_core::{CommentId, NewsId};

use super::{report, GlobalOpts};

/// Comment subcommands
#[derive(Debug, Subcommand)]
pub enum CommentCommand {
    /// Comment on a news item
    Add {
        /// News ID
        news_id: NewsId,

        /// Comment text
        #[arg(long)]
        text: String,
    },

    /// Replace the text of your comment
    Edit {
        /// Comment ID
        id: CommentId,

        /// New comment text
        #[arg(long)]
        text: String,
    },

    /// Delete your comment
    Delete {
        /// Comment ID
        id: CommentId,
    },
}

/// Execute the comment command
pub fn execute(cmd: CommentCommand, opts: &GlobalOpts) -> Result<()> {
    let site = opts.open_site()?;
    let actor = opts.actor(site.store())?;

    let response = match cmd {
        CommentCommand::Add { news_id, text } => {
            site.post_comment(news_id, actor.as_ref(), &CommentForm::new(text))?
        }
        CommentCommand::Edit { id, text } => {
            site.edit_comment(id, actor.as_ref(), &CommentForm::new(text))?
        }
        CommentCommand::Delete { id } => site.delete_comment(id, actor.as_ref())?,
    };

    report(&response)
}
