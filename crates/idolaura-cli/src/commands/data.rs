//! Snapshot and status commands

use std::fs;
use std::path::PathBuf;

use clap::Args;
use idolaura::auth;

use super::{open_store, CmdResult};

// =============================================================================
// Export / import / clear
// =============================================================================

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file
    pub file: PathBuf,
}

pub fn execute_export(args: ExportArgs) -> CmdResult {
    let store = open_store()?;
    let json = store.export_json()?;
    fs::write(&args.file, json)?;
    println!("Exported snapshot to {}", args.file.display());
    Ok(())
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Source file (a previous export, possibly hand-edited)
    pub file: PathBuf,
}

pub fn execute_import(args: ImportArgs) -> CmdResult {
    let store = open_store()?;
    let json = fs::read_to_string(&args.file)?;
    if store.import_json(&json) {
        println!("Imported snapshot from {}", args.file.display());
        Ok(())
    } else {
        Err("importing snapshot failed".into())
    }
}

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Actually delete; without this flag nothing happens
    #[arg(long)]
    pub yes: bool,
}

pub fn execute_clear(args: ClearArgs) -> CmdResult {
    if !args.yes {
        return Err("this deletes the local snapshot; pass --yes to confirm".into());
    }
    let store = open_store()?;
    store.clear_local()?;
    println!("Local snapshot deleted.");
    Ok(())
}

// =============================================================================
// Status
// =============================================================================

#[derive(Debug, Args)]
pub struct StatusArgs {}

pub fn execute_status(_args: StatusArgs) -> CmdResult {
    let store = open_store()?;

    println!("Backend:      {}", store.backend_label());
    match auth::load_session() {
        Some(session) => println!("Session:      {}", session.user_email),
        None => println!("Session:      none"),
    }
    println!("Total shows:  {}", store.settings().total_shows);
    println!();
    println!("Photos:       {}", store.photos().len());
    println!("Events:       {}", store.schedule_events().len());
    println!("Media items:  {}", store.media_items().len());
    println!("Milestones:   {}", store.milestones().len());
    println!("Fun facts:    {}", store.fun_facts().len());
    println!("Hashtags:     {}", store.hashtags().len());
    println!("Stage units:  {}", store.stage_units().len());

    Ok(())
}
