//! Media link commands

use clap::{Args, Subcommand};
use idolaura::data::{MediaKind, NewMediaItem};

use super::{open_store, CmdResult};

#[derive(Debug, Args)]
pub struct MediaArgs {
    #[command(subcommand)]
    pub command: MediaCommand,
}

#[derive(Debug, Subcommand)]
pub enum MediaCommand {
    /// List all media items, newest first
    List,
    /// Add a media item
    Add(AddMediaArgs),
    /// Remove a media item by id
    Remove { id: String },
}

#[derive(Debug, Args)]
pub struct AddMediaArgs {
    #[arg(long)]
    pub title: String,

    /// video, audio or article
    #[arg(long, default_value = "video")]
    pub kind: String,

    #[arg(long)]
    pub url: String,

    #[arg(long)]
    pub thumbnail: Option<String>,

    #[arg(long)]
    pub description: Option<String>,
}

pub fn execute(args: MediaArgs) -> CmdResult {
    let store = open_store()?;
    match args.command {
        MediaCommand::List => {
            let items = store.media_items();
            if items.is_empty() {
                println!("No media items.");
                return Ok(());
            }
            for item in &items {
                println!("{}  {:<7}  {}  {}", item.id, item.kind.as_str(), item.title, item.url);
            }
            println!("{} item(s)", items.len());
            Ok(())
        }
        MediaCommand::Add(add) => {
            let kind = MediaKind::parse(&add.kind)
                .ok_or_else(|| format!("unknown media kind '{}'", add.kind))?;
            let mut item = NewMediaItem::new(add.title, kind, add.url);
            if let Some(thumbnail) = add.thumbnail {
                item = item.with_thumbnail(thumbnail);
            }
            if let Some(description) = add.description {
                item = item.with_description(description);
            }
            match store.add_media_item(item) {
                Some(stored) => {
                    println!("Added media item {}", stored.id);
                    Ok(())
                }
                None => Err("adding media item failed".into()),
            }
        }
        MediaCommand::Remove { id } => {
            if store.remove_media_item(&id) {
                println!("Removed media item {}", id);
                Ok(())
            } else {
                Err("removing media item failed".into())
            }
        }
    }
}
