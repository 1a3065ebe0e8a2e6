//! Schedule event commands

use clap::{Args, Subcommand};
use idolaura::data::{EventKind, NewScheduleEvent};

use super::{open_store, CmdResult};

#[derive(Debug, Args)]
pub struct ScheduleArgs {
    #[command(subcommand)]
    pub command: ScheduleCommand,
}

#[derive(Debug, Subcommand)]
pub enum ScheduleCommand {
    /// List all events, soonest first
    List,
    /// Add an event
    Add(AddEventArgs),
    /// Remove an event by id
    Remove { id: String },
}

#[derive(Debug, Args)]
pub struct AddEventArgs {
    #[arg(long)]
    pub title: String,

    /// Event date ("2026-02-15" or "Feb 15, 2026")
    #[arg(long)]
    pub date: String,

    /// Display time (e.g. "19:00 WIB")
    #[arg(long, default_value = "")]
    pub time: String,

    #[arg(long, default_value = "")]
    pub location: String,

    /// Concert, fan-event, tv, special or release
    #[arg(long, default_value = "concert")]
    pub kind: String,

    /// Highlight the event on the home page
    #[arg(long)]
    pub featured: bool,

    /// Optional ticket/info link
    #[arg(long)]
    pub link: Option<String>,
}

pub fn execute(args: ScheduleArgs) -> CmdResult {
    let store = open_store()?;
    match args.command {
        ScheduleCommand::List => {
            let events = store.schedule_events();
            if events.is_empty() {
                println!("No events.");
                return Ok(());
            }
            for event in &events {
                let featured = if event.featured { " *" } else { "" };
                println!(
                    "{}  {:<12}  {:<9}  {}{}",
                    event.id,
                    event.date,
                    event.kind.as_str(),
                    event.title,
                    featured
                );
                if !event.location.is_empty() || !event.time.is_empty() {
                    println!("      {} {}", event.time, event.location);
                }
            }
            println!("{} event(s)", events.len());
            Ok(())
        }
        ScheduleCommand::Add(add) => {
            let kind = EventKind::parse(&add.kind)
                .ok_or_else(|| format!("unknown event kind '{}'", add.kind))?;
            let mut event = NewScheduleEvent::new(add.title, add.date)
                .with_time(add.time)
                .with_location(add.location)
                .with_kind(kind)
                .featured(add.featured);
            if let Some(link) = add.link {
                event = event.with_link(link);
            }
            match store.add_schedule_event(event) {
                Some(stored) => {
                    println!("Added event {}", stored.id);
                    Ok(())
                }
                None => Err("adding event failed".into()),
            }
        }
        ScheduleCommand::Remove { id } => {
            if store.remove_schedule_event(&id) {
                println!("Removed event {}", id);
                Ok(())
            } else {
                Err("removing event failed".into())
            }
        }
    }
}
