//! Gallery photo commands

use clap::{Args, Subcommand};

use super::{open_store, CmdResult};

#[derive(Debug, Args)]
pub struct GalleryArgs {
    #[command(subcommand)]
    pub command: GalleryCommand,
}

#[derive(Debug, Subcommand)]
pub enum GalleryCommand {
    /// List all photos, newest first
    List,
    /// Add a photo by URL
    Add { url: String },
    /// Remove a photo by id
    Remove { id: String },
}

pub fn execute(args: GalleryArgs) -> CmdResult {
    let store = open_store()?;
    match args.command {
        GalleryCommand::List => {
            let photos = store.photos();
            if photos.is_empty() {
                println!("No photos.");
                return Ok(());
            }
            for photo in &photos {
                println!(
                    "{}  {}  {}",
                    photo.id,
                    photo.added_at.format("%Y-%m-%d %H:%M"),
                    photo.url
                );
            }
            println!("{} photo(s)", photos.len());
            Ok(())
        }
        GalleryCommand::Add { url } => match store.add_photo(url) {
            Some(photo) => {
                println!("Added photo {}", photo.id);
                Ok(())
            }
            None => Err("adding photo failed".into()),
        },
        GalleryCommand::Remove { id } => {
            if store.remove_photo(&id) {
                println!("Removed photo {}", id);
                Ok(())
            } else {
                Err("removing photo failed".into())
            }
        }
    }
}
