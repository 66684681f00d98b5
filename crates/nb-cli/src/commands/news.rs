//! News command
//!
//! Publish news and render the home and detail pages.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Subcommand;

use nb_core::news::NewsBuilder;
use nb_core::site::DetailPage;
use nb_core::NewsId;

use super::GlobalOpts;

/// News subcommands
#[derive(Debug, Subcommand)]
pub enum NewsCommand {
    /// Publish a news item
    Add {
        /// Headline
        #[arg(long)]
        title: String,

        /// Body text
        #[arg(long)]
        text: String,

        /// Publication date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Show the home page
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a news item with its comments
    Show {
        /// News ID
        id: NewsId,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a news item and its comments
    Delete {
        /// News ID
        id: NewsId,

        /// Skip confirmation
        #[arg(long, short)]
        yes: bool,
    },
}

/// Execute the news command
pub fn execute(cmd: NewsCommand, opts: &GlobalOpts) -> Result<()> {
    let site = opts.open_site()?;

    match cmd {
        NewsCommand::Add { title, text, date } => {
            use colored::Colorize;

            let mut builder = NewsBuilder::new().title(title).text(text);
            if let Some(date) = date {
                builder = builder.date(date);
            }
            let news = site.store().create_news(builder.build()?)?;
            println!("{} Published news {} ({})", "✓".green(), news.id, news.date);
            Ok(())
        }
        NewsCommand::List { json } => list_news(&site, json),
        NewsCommand::Show { id, json } => {
            let actor = opts.actor(site.store())?;
            let page = site
                .detail(id, actor.as_ref())
                .with_context(|| format!("News '{}' not found", id))?;
            show_news(&site, &page, json)
        }
        NewsCommand::Delete { id, yes } => delete_news(&site, id, yes),
    }
}

fn list_news(site: &nb_core::NewsSite, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let page = site.home()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&page)?);
        return Ok(());
    }

    if page.object_list.is_empty() {
        println!("No news yet.");
        return Ok(());
    }

    println!("{}", "News:".bold().underline());
    println!();
    for news in &page.object_list {
        println!(
            "  {} {} {}",
            format!("#{}", news.id).green(),
            news.date.to_string().dimmed(),
            news.title
        );
    }

    Ok(())
}

fn show_news(site: &nb_core::NewsSite, page: &DetailPage, as_json: bool) -> Result<()> {
    use colored::Colorize;

    if as_json {
        println!("{}", serde_json::to_string_pretty(page)?);
        return Ok(());
    }

    println!("{}", page.news.title.bold().underline());
    println!("{}", page.news.date.to_string().dimmed());
    println!();
    println!("{}", page.news.text);
    println!();
    println!("{} ({})", "Comments".bold(), page.comments.len());

    for comment in &page.comments {
        let author = site
            .store()
            .get_actor(&comment.author_id)
            .map(|a| a.username)
            .unwrap_or_else(|_| "unknown".to_string());
        println!(
            "  {} {} {}",
            format!("#{}", comment.id).green(),
            author.cyan(),
            comment.created_at.format("%Y-%m-%d %H:%M:%S").to_string().dimmed()
        );
        println!("    {}", comment.text);
    }

    if page.form.is_some() {
        println!();
        println!(
            "Add a comment: {}",
            format!("newsboard comment add {} --text ...", page.news.id).cyan()
        );
    }

    Ok(())
}

fn delete_news(site: &nb_core::NewsSite, id: NewsId, yes: bool) -> Result<()> {
    use colored::Colorize;

    let page = site
        .detail(id, None)
        .with_context(|| format!("News '{}' not found", id))?;

    if !yes {
        use dialoguer::Confirm;

        println!("News: {}", page.news.title.green());
        println!("  {} comments", page.comments.len());

        let confirmed = Confirm::new()
            .with_prompt("Delete this news item and its comments?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Deletion cancelled.");
            return Ok(());
        }
    }

    let removed = site.store().delete_news(id)?;
    println!(
        "{} News '{}' deleted with {} comments.",
        "✓".green(),
        id,
        removed
    );

    Ok(())
}
