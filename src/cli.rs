//! Command-line interface for the newsdesk admin tools.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::query::FilterSet;

#[derive(Debug, Parser)]
#[command(name = "newsdesk", about = "Admin tools for the news content API", version)]
pub struct Cli {
    /// Path to the config file (defaults to the platform config directory).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch and print one page of the collection.
    List {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Items per page; overrides the configured page size.
        #[arg(long)]
        limit: Option<u32>,
        /// Category filter; "All" means unfiltered.
        #[arg(long, default_value = "All")]
        category: String,
        /// Source filter; "All" means unfiltered.
        #[arg(long, default_value = "All")]
        source: String,
        /// Type filter; "All" means unfiltered.
        #[arg(long = "type", default_value = "All")]
        kind: String,
        /// Restrict to pinned (or unpinned) posts.
        #[arg(long)]
        pinned: Option<bool>,
        /// Re-fetch every N seconds until interrupted.
        #[arg(long, value_name = "SECONDS")]
        watch: Option<u64>,
    },
    /// Delete a post by id.
    Delete {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Trigger the push-notification fan-out for a post.
    Notify { id: String },
}

impl Command {
    /// Assemble the filter set for a `list` invocation.
    ///
    /// Sentinel values ("All") are passed through; the query layer drops
    /// them from the outgoing request.
    pub fn filters(category: &str, source: &str, kind: &str, pinned: Option<bool>) -> FilterSet {
        let mut filters = FilterSet::new()
            .with("category", category)
            .with("source", source)
            .with("type", kind);
        if let Some(pinned) = pinned {
            filters.set("pinned", pinned.to_string());
        }
        filters
    }
}

/// Ask the operator to confirm a destructive action.
///
/// Reads one line from stdin; anything other than `y`/`yes`
/// (case-insensitive) declines.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N] ", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
