//! CLI command implementations

pub mod about;
pub mod data;
pub mod gallery;
pub mod media;
pub mod schedule;
pub mod session;

use idolaura::ContentStore;

/// Shared command result type
pub type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Open the content store, picking the backend from the environment
pub fn open_store() -> Result<ContentStore, Box<dyn std::error::Error>> {
    Ok(ContentStore::open()?)
}
