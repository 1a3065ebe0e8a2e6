//! Storage backend trait
//!
//! One uniform interface over the two persistence paths. The store picks
//! an implementation once at startup instead of re-checking configuration
//! on every call; everything else is identical between them.

use crate::data::types::{
    FunFact, GalleryPhoto, Hashtag, MediaItem, Milestone, NewFunFact, NewHashtag, NewMediaItem,
    NewMilestone, NewPhoto, NewScheduleEvent, NewStageUnit, ScheduleEvent, SiteSettings, StageUnit,
};
use crate::error::Result;

/// A persistence backend for the site's content collections
///
/// Fetches return records in storage order; display ordering is applied
/// by the caller. Inserts return the stored record (with whatever id the
/// backend assigned). Deletes are by record id.
pub trait StoreBackend: Send + Sync {
    /// Short label for logs and the status display ("local" or "remote")
    fn label(&self) -> &'static str;

    // === Gallery ===
    fn fetch_photos(&self) -> Result<Vec<GalleryPhoto>>;
    fn insert_photo(&self, photo: NewPhoto) -> Result<GalleryPhoto>;
    fn delete_photo(&self, id: &str) -> Result<()>;

    // === Schedule ===
    fn fetch_schedule(&self) -> Result<Vec<ScheduleEvent>>;
    fn insert_schedule_event(&self, event: NewScheduleEvent) -> Result<ScheduleEvent>;
    fn delete_schedule_event(&self, id: &str) -> Result<()>;

    // === Media ===
    fn fetch_media(&self) -> Result<Vec<MediaItem>>;
    fn insert_media_item(&self, item: NewMediaItem) -> Result<MediaItem>;
    fn delete_media_item(&self, id: &str) -> Result<()>;

    // === Milestones ===
    fn fetch_milestones(&self) -> Result<Vec<Milestone>>;
    fn insert_milestone(&self, milestone: NewMilestone) -> Result<Milestone>;
    fn delete_milestone(&self, id: &str) -> Result<()>;

    // === Fun facts ===
    fn fetch_fun_facts(&self) -> Result<Vec<FunFact>>;
    fn insert_fun_fact(&self, fact: NewFunFact) -> Result<FunFact>;
    fn delete_fun_fact(&self, id: &str) -> Result<()>;

    // === Hashtags ===
    fn fetch_hashtags(&self) -> Result<Vec<Hashtag>>;
    fn insert_hashtag(&self, hashtag: NewHashtag) -> Result<Hashtag>;
    fn delete_hashtag(&self, id: &str) -> Result<()>;

    // === Stage units ===
    fn fetch_stage_units(&self) -> Result<Vec<StageUnit>>;
    fn insert_stage_unit(&self, unit: NewStageUnit) -> Result<StageUnit>;
    fn delete_stage_unit(&self, id: &str) -> Result<()>;

    // === Settings ===
    fn fetch_settings(&self) -> Result<SiteSettings>;
    fn upsert_total_shows(&self, total_shows: u32) -> Result<()>;
}
