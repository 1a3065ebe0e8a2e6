//! About-page content commands
//!
//! Milestones, fun facts, hashtags, stage units, and the show counter.

use clap::{Args, Subcommand};
use idolaura::content;
use idolaura::data::{NewFunFact, NewHashtag, NewMilestone, NewStageUnit};

use super::{open_store, CmdResult};

// =============================================================================
// Milestones
// =============================================================================

#[derive(Debug, Args)]
pub struct MilestonesArgs {
    #[command(subcommand)]
    pub command: MilestonesCommand,
}

#[derive(Debug, Subcommand)]
pub enum MilestonesCommand {
    /// List stored milestones; --merged falls back to the defaults when empty
    List {
        /// Show the list as the about page renders it
        #[arg(long)]
        merged: bool,
    },
    /// Add a milestone
    Add(AddMilestoneArgs),
    /// Remove a milestone by id
    Remove { id: String },
}

#[derive(Debug, Args)]
pub struct AddMilestoneArgs {
    #[arg(long)]
    pub year: String,

    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub description: String,

    /// Display position (lower = earlier)
    #[arg(long, default_value_t = 0)]
    pub order: i32,
}

pub fn execute_milestones(args: MilestonesArgs) -> CmdResult {
    let store = open_store()?;
    match args.command {
        MilestonesCommand::List { merged } => {
            let milestones = if merged {
                content::milestones_or_default(store.milestones())
            } else {
                store.milestones()
            };
            if milestones.is_empty() {
                println!("No milestones.");
                return Ok(());
            }
            for m in &milestones {
                println!("{}  [{}] {} — {}", m.id, m.year, m.title, m.description);
            }
            println!("{} milestone(s)", milestones.len());
            Ok(())
        }
        MilestonesCommand::Add(add) => {
            let milestone = NewMilestone::new(add.year, add.title, add.description)
                .with_order(add.order);
            match store.add_milestone(milestone) {
                Some(stored) => {
                    println!("Added milestone {}", stored.id);
                    Ok(())
                }
                None => Err("adding milestone failed".into()),
            }
        }
        MilestonesCommand::Remove { id } => {
            if store.remove_milestone(&id) {
                println!("Removed milestone {}", id);
                Ok(())
            } else {
                Err("removing milestone failed".into())
            }
        }
    }
}

// =============================================================================
// Fun facts
// =============================================================================

#[derive(Debug, Args)]
pub struct FactsArgs {
    #[command(subcommand)]
    pub command: FactsCommand,
}

#[derive(Debug, Subcommand)]
pub enum FactsCommand {
    /// List stored fun facts; --merged falls back to the defaults when empty
    List {
        /// Show the list as the about page renders it
        #[arg(long)]
        merged: bool,
    },
    /// Add a fun fact
    Add(AddFactArgs),
    /// Remove a fun fact by id
    Remove { id: String },
}

#[derive(Debug, Args)]
pub struct AddFactArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub description: String,

    #[arg(long, default_value_t = 0)]
    pub order: i32,
}

pub fn execute_facts(args: FactsArgs) -> CmdResult {
    let store = open_store()?;
    match args.command {
        FactsCommand::List { merged } => {
            let facts = if merged {
                content::fun_facts_or_default(store.fun_facts())
            } else {
                store.fun_facts()
            };
            if facts.is_empty() {
                println!("No fun facts.");
                return Ok(());
            }
            for f in &facts {
                println!("{}  {} — {}", f.id, f.title, f.description);
            }
            println!("{} fact(s)", facts.len());
            Ok(())
        }
        FactsCommand::Add(add) => {
            let fact = NewFunFact::new(add.title, add.description).with_order(add.order);
            match store.add_fun_fact(fact) {
                Some(stored) => {
                    println!("Added fun fact {}", stored.id);
                    Ok(())
                }
                None => Err("adding fun fact failed".into()),
            }
        }
        FactsCommand::Remove { id } => {
            if store.remove_fun_fact(&id) {
                println!("Removed fun fact {}", id);
                Ok(())
            } else {
                Err("removing fun fact failed".into())
            }
        }
    }
}

// =============================================================================
// Hashtags
// =============================================================================

#[derive(Debug, Args)]
pub struct HashtagsArgs {
    #[command(subcommand)]
    pub command: HashtagsCommand,
}

#[derive(Debug, Subcommand)]
pub enum HashtagsCommand {
    /// List stored hashtags; --merged overlays them onto the defaults
    List {
        /// Show the list as the about page renders it
        #[arg(long)]
        merged: bool,
    },
    /// Add a hashtag
    Add(AddHashtagArgs),
    /// Remove a hashtag by id
    Remove { id: String },
}

#[derive(Debug, Args)]
pub struct AddHashtagArgs {
    /// Tag text, e.g. "#SenINTAN"
    #[arg(long)]
    pub tag: String,

    /// Usage label, e.g. "Every Monday"
    #[arg(long)]
    pub label: String,

    #[arg(long, default_value = "")]
    pub emoji: String,

    /// Mark as a Ramadan-season hashtag
    #[arg(long)]
    pub ramadan: bool,

    #[arg(long, default_value_t = 0)]
    pub order: i32,
}

pub fn execute_hashtags(args: HashtagsArgs) -> CmdResult {
    let store = open_store()?;
    match args.command {
        HashtagsCommand::List { merged } => {
            let hashtags = if merged {
                content::merged_hashtags(store.hashtags())
            } else {
                store.hashtags()
            };
            if hashtags.is_empty() {
                println!("No hashtags.");
                return Ok(());
            }
            for h in &hashtags {
                let ramadan = if h.is_ramadan { " (ramadan)" } else { "" };
                println!("{}  {} {}  {}{}", h.id, h.emoji, h.tag, h.label, ramadan);
            }
            println!("{} hashtag(s)", hashtags.len());
            Ok(())
        }
        HashtagsCommand::Add(add) => {
            let hashtag = NewHashtag::new(add.tag, add.label)
                .with_emoji(add.emoji)
                .ramadan(add.ramadan)
                .with_order(add.order);
            match store.add_hashtag(hashtag) {
                Some(stored) => {
                    println!("Added hashtag {}", stored.id);
                    Ok(())
                }
                None => Err("adding hashtag failed".into()),
            }
        }
        HashtagsCommand::Remove { id } => {
            if store.remove_hashtag(&id) {
                println!("Removed hashtag {}", id);
                Ok(())
            } else {
                Err("removing hashtag failed".into())
            }
        }
    }
}

// =============================================================================
// Stage units
// =============================================================================

#[derive(Debug, Args)]
pub struct UnitsArgs {
    #[command(subcommand)]
    pub command: UnitsCommand,
}

#[derive(Debug, Subcommand)]
pub enum UnitsCommand {
    /// List stored stage units; --merged falls back to the defaults when empty
    List {
        /// Show the list as the about page renders it
        #[arg(long)]
        merged: bool,
    },
    /// Add a stage unit
    Add(AddUnitArgs),
    /// Remove a stage unit by id
    Remove { id: String },
}

#[derive(Debug, Args)]
pub struct AddUnitArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub setlist: String,

    /// Gradient start color (hex)
    #[arg(long, default_value = "#f43f5e")]
    pub color_from: String,

    /// Gradient end color (hex)
    #[arg(long, default_value = "#ec4899")]
    pub color_to: String,

    /// Song title; repeat for multiple songs
    #[arg(long = "song")]
    pub songs: Vec<String>,

    #[arg(long, default_value_t = 0)]
    pub order: i32,
}

pub fn execute_units(args: UnitsArgs) -> CmdResult {
    let store = open_store()?;
    match args.command {
        UnitsCommand::List { merged } => {
            let units = if merged {
                content::stage_units_or_default(store.stage_units())
            } else {
                store.stage_units()
            };
            if units.is_empty() {
                println!("No stage units.");
                return Ok(());
            }
            for u in &units {
                println!("{}  {} — {}", u.id, u.name, u.setlist);
                for song in &u.songs {
                    println!("      {}", song);
                }
            }
            println!("{} unit(s)", units.len());
            Ok(())
        }
        UnitsCommand::Add(add) => {
            let unit = NewStageUnit::new(add.name, add.setlist)
                .with_colors(add.color_from, add.color_to)
                .with_songs(add.songs)
                .with_order(add.order);
            match store.add_stage_unit(unit) {
                Some(stored) => {
                    println!("Added stage unit {}", stored.id);
                    Ok(())
                }
                None => Err("adding stage unit failed".into()),
            }
        }
        UnitsCommand::Remove { id } => {
            if store.remove_stage_unit(&id) {
                println!("Removed stage unit {}", id);
                Ok(())
            } else {
                Err("removing stage unit failed".into())
            }
        }
    }
}

// =============================================================================
// Show counter
// =============================================================================

#[derive(Debug, Args)]
pub struct ShowsArgs {
    #[command(subcommand)]
    pub command: Option<ShowsCommand>,
}

#[derive(Debug, Subcommand)]
pub enum ShowsCommand {
    /// Set the total show counter
    Set { count: u32 },
}

pub fn execute_shows(args: ShowsArgs) -> CmdResult {
    let store = open_store()?;
    match args.command {
        None => {
            println!("Total shows: {}", store.settings().total_shows);
            Ok(())
        }
        Some(ShowsCommand::Set { count }) => {
            if store.set_total_shows(count) {
                println!("Total shows set to {}", count);
                Ok(())
            } else {
                Err("updating total shows failed".into())
            }
        }
    }
}
