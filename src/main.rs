use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;

use newsdesk::api::{FetchExecutor, MutationClient};
use newsdesk::cli::{confirm, Cli, Command};
use newsdesk::config::Config;
use newsdesk::logging::init_tracing;
use newsdesk::models::Post;
use newsdesk::query::CollectionQuery;
use newsdesk::store::{CollectionSnapshot, ViewModelStore};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(cli.config.clone())?;

    match cli.command {
        Command::List {
            page,
            limit,
            category,
            source,
            kind,
            pinned,
            watch,
        } => {
            let filters = Command::filters(&category, &source, &kind, pinned);
            let query = CollectionQuery::new(limit.unwrap_or(config.api.page_size));
            let executor = FetchExecutor::<Post>::new(&config.api);
            let store = ViewModelStore::new(executor, query);

            store.request(page, filters).await;
            let snapshot = store.snapshot();
            print_page(&snapshot);
            if snapshot.result.is_none() {
                if let Some(error) = snapshot.error {
                    bail!("{error}");
                }
            }

            if let Some(interval) = watch {
                loop {
                    tokio::time::sleep(Duration::from_secs(interval.max(1))).await;
                    store.invalidate().await;
                    print_page(&store.snapshot());
                }
            }
        }
        Command::Delete { id, yes } => {
            if !yes && !confirm(&format!("Delete post {}?", id))? {
                bail!("aborted");
            }
            MutationClient::new(&config.api)
                .delete_post(&id)
                .await
                .with_context(|| format!("deleting post {}", id))?;
            println!("deleted {}", id);
        }
        Command::Notify { id } => {
            MutationClient::new(&config.api)
                .notify_post(&id)
                .await
                .with_context(|| format!("notifying for post {}", id))?;
            println!("notification sent for {}", id);
        }
    }

    Ok(())
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(&path)?,
        None => Config::load()?,
    };
    Ok(config)
}

fn print_page(snapshot: &CollectionSnapshot<Post>) {
    if let Some(error) = &snapshot.error {
        eprintln!("error: {}", error);
    }
    let Some(result) = &snapshot.result else {
        return;
    };

    println!(
        "page {}/{} ({} total)",
        result.current_page, result.total_pages, result.total_count
    );
    for post in &result.items {
        let mut tags = Vec::new();
        if let Some(category) = &post.category {
            tags.push(category.as_str());
        }
        if let Some(source) = &post.source {
            tags.push(source.as_str());
        }
        let pin = if post.pinned { "*" } else { " " };
        if tags.is_empty() {
            println!("{} {}  {}", pin, post.id, post.title);
        } else {
            println!("{} {}  {}  [{}]", pin, post.id, post.title, tags.join(", "));
        }
    }
}
