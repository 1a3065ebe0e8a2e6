//! Idolaura admin CLI
//!
//! Terminal admin panel for the Idolaura fan site: list, add and remove
//! content, manage the show counter, sign in against the remote backend,
//! and export/import the local snapshot.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "idolaura")]
#[command(about = "Idolaura fan site content admin", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Gallery photos
    Gallery(commands::gallery::GalleryArgs),
    /// Schedule events
    Schedule(commands::schedule::ScheduleArgs),
    /// Media links (videos, audio, articles)
    Media(commands::media::MediaArgs),
    /// Timeline milestones
    Milestones(commands::about::MilestonesArgs),
    /// Fun fact cards
    Facts(commands::about::FactsArgs),
    /// Fan hashtags
    Hashtags(commands::about::HashtagsArgs),
    /// Theater stage units
    Units(commands::about::UnitsArgs),
    /// Show the total show counter, or set it
    Shows(commands::about::ShowsArgs),
    /// Write the local snapshot to a JSON file
    Export(commands::data::ExportArgs),
    /// Replace the local snapshot from a JSON file
    Import(commands::data::ImportArgs),
    /// Delete the local snapshot
    Clear(commands::data::ClearArgs),
    /// Sign in to the remote backend
    Login(commands::session::LoginArgs),
    /// Sign out and drop the persisted session
    Logout(commands::session::LogoutArgs),
    /// Backend mode, session and content counts
    Status(commands::data::StatusArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Gallery(args) => commands::gallery::execute(args),
        Commands::Schedule(args) => commands::schedule::execute(args),
        Commands::Media(args) => commands::media::execute(args),
        Commands::Milestones(args) => commands::about::execute_milestones(args),
        Commands::Facts(args) => commands::about::execute_facts(args),
        Commands::Hashtags(args) => commands::about::execute_hashtags(args),
        Commands::Units(args) => commands::about::execute_units(args),
        Commands::Shows(args) => commands::about::execute_shows(args),
        Commands::Export(args) => commands::data::execute_export(args),
        Commands::Import(args) => commands::data::execute_import(args),
        Commands::Clear(args) => commands::data::execute_clear(args),
        Commands::Login(args) => commands::session::execute_login(args),
        Commands::Logout(args) => commands::session::execute_logout(args),
        Commands::Status(args) => commands::data::execute_status(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
