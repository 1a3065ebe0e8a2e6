//! Content store
//!
//! The single entry point consumers use. Owns one storage backend,
//! chosen at open time, plus the local snapshot used as a read fallback.
//! Callers never see backend errors: reads degrade to the last local
//! snapshot, writes report failure as `None`/`false`. Failures are
//! logged, not raised.

use tracing::{debug, warn};

use crate::auth;
use crate::data::backend::StoreBackend;
use crate::data::local::{LocalBackend, LocalStore};
use crate::data::remote::{RemoteBackend, RemoteConfig};
use crate::data::types::{
    FunFact, GalleryPhoto, Hashtag, MediaItem, Milestone, NewFunFact, NewHashtag, NewMediaItem,
    NewMilestone, NewPhoto, NewScheduleEvent, NewStageUnit, ScheduleEvent, SiteData, SiteSettings,
    StageUnit,
};
use crate::error::Result;

/// Uniform content access over the configured backend
pub struct ContentStore {
    backend: Box<dyn StoreBackend>,
    fallback: LocalStore,
}

impl ContentStore {
    /// Open the store, picking the backend once
    ///
    /// Remote when both connection parameters are present in the
    /// environment (a persisted admin session is attached if there is
    /// one), local otherwise.
    pub fn open() -> Result<Self> {
        let local = LocalStore::open_default()?;
        match RemoteConfig::from_env() {
            Some(config) => {
                debug!(url = %config.url, "using remote backend");
                let token = auth::load_session().map(|s| s.access_token);
                let backend = RemoteBackend::new(config, token)?;
                Ok(Self::with_backend(Box::new(backend), local))
            }
            None => {
                debug!("no remote backend configured, using local store");
                Ok(Self::local(local))
            }
        }
    }

    /// Open a store over the local snapshot only
    pub fn local(store: LocalStore) -> Self {
        let fallback = store.clone();
        Self {
            backend: Box::new(LocalBackend::new(store)),
            fallback,
        }
    }

    /// Open a store over an explicit backend (tests, embedding)
    pub fn with_backend(backend: Box<dyn StoreBackend>, fallback: LocalStore) -> Self {
        Self { backend, fallback }
    }

    /// Which backend this store routes to ("local" or "remote")
    pub fn backend_label(&self) -> &'static str {
        self.backend.label()
    }

    // =========================================================================
    // Masking helpers
    // =========================================================================

    fn read<T>(&self, what: &str, fetched: Result<Vec<T>>, pick: fn(SiteData) -> Vec<T>) -> Vec<T> {
        match fetched {
            Ok(records) => records,
            Err(e) => {
                warn!(backend = self.backend.label(), error = %e,
                    "fetching {what} failed, using local snapshot");
                pick(self.fallback.snapshot_or_default())
            }
        }
    }

    fn created<T>(&self, what: &str, result: Result<T>) -> Option<T> {
        match result {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(backend = self.backend.label(), error = %e, "adding {what} failed");
                None
            }
        }
    }

    fn removed(&self, what: &str, result: Result<()>) -> bool {
        match result {
            Ok(()) => true,
            Err(e) => {
                warn!(backend = self.backend.label(), error = %e, "removing {what} failed");
                false
            }
        }
    }

    // =========================================================================
    // Gallery
    // =========================================================================

    /// All gallery photos, newest first
    pub fn photos(&self) -> Vec<GalleryPhoto> {
        let mut photos = self.read("photos", self.backend.fetch_photos(), |d| d.gallery);
        photos.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        photos
    }

    pub fn add_photo(&self, url: impl Into<String>) -> Option<GalleryPhoto> {
        self.created("photo", self.backend.insert_photo(NewPhoto::new(url)))
    }

    pub fn remove_photo(&self, id: &str) -> bool {
        self.removed("photo", self.backend.delete_photo(id))
    }

    // =========================================================================
    // Schedule
    // =========================================================================

    /// All schedule events, soonest first; events with unparsable dates
    /// keep their insertion order at the end
    pub fn schedule_events(&self) -> Vec<ScheduleEvent> {
        let mut events = self.read("schedule", self.backend.fetch_schedule(), |d| d.schedule);
        events.sort_by_key(|e| {
            let date = e.parsed_date();
            (date.is_none(), date)
        });
        events
    }

    pub fn add_schedule_event(&self, event: NewScheduleEvent) -> Option<ScheduleEvent> {
        self.created("schedule event", self.backend.insert_schedule_event(event))
    }

    pub fn remove_schedule_event(&self, id: &str) -> bool {
        self.removed("schedule event", self.backend.delete_schedule_event(id))
    }

    // =========================================================================
    // Media
    // =========================================================================

    /// All media items, newest first
    pub fn media_items(&self) -> Vec<MediaItem> {
        let mut items = self.read("media", self.backend.fetch_media(), |d| d.media);
        items.sort_by(|a, b| b.added_at.cmp(&a.added_at));
        items
    }

    pub fn add_media_item(&self, item: NewMediaItem) -> Option<MediaItem> {
        self.created("media item", self.backend.insert_media_item(item))
    }

    pub fn remove_media_item(&self, id: &str) -> bool {
        self.removed("media item", self.backend.delete_media_item(id))
    }

    // =========================================================================
    // Milestones
    // =========================================================================

    /// All milestones in display order
    pub fn milestones(&self) -> Vec<Milestone> {
        let mut milestones =
            self.read("milestones", self.backend.fetch_milestones(), |d| d.milestones);
        milestones.sort_by_key(|m| m.order_index);
        milestones
    }

    pub fn add_milestone(&self, milestone: NewMilestone) -> Option<Milestone> {
        self.created("milestone", self.backend.insert_milestone(milestone))
    }

    pub fn remove_milestone(&self, id: &str) -> bool {
        self.removed("milestone", self.backend.delete_milestone(id))
    }

    // =========================================================================
    // Fun facts
    // =========================================================================

    /// All fun facts in display order
    pub fn fun_facts(&self) -> Vec<FunFact> {
        let mut facts = self.read("fun facts", self.backend.fetch_fun_facts(), |d| d.fun_facts);
        facts.sort_by_key(|f| f.order_index);
        facts
    }

    pub fn add_fun_fact(&self, fact: NewFunFact) -> Option<FunFact> {
        self.created("fun fact", self.backend.insert_fun_fact(fact))
    }

    pub fn remove_fun_fact(&self, id: &str) -> bool {
        self.removed("fun fact", self.backend.delete_fun_fact(id))
    }

    // =========================================================================
    // Hashtags
    // =========================================================================

    /// Stored hashtags in display order
    ///
    /// These are the store's rows only; overlaying them onto the built-in
    /// defaults is a display concern (`content::merged_hashtags`).
    pub fn hashtags(&self) -> Vec<Hashtag> {
        let mut hashtags = self.read("hashtags", self.backend.fetch_hashtags(), |d| d.hashtags);
        hashtags.sort_by_key(|h| h.order_index);
        hashtags
    }

    pub fn add_hashtag(&self, hashtag: NewHashtag) -> Option<Hashtag> {
        self.created("hashtag", self.backend.insert_hashtag(hashtag))
    }

    pub fn remove_hashtag(&self, id: &str) -> bool {
        self.removed("hashtag", self.backend.delete_hashtag(id))
    }

    // =========================================================================
    // Stage units
    // =========================================================================

    /// All stage units in display order
    pub fn stage_units(&self) -> Vec<StageUnit> {
        let mut units =
            self.read("stage units", self.backend.fetch_stage_units(), |d| d.stage_units);
        units.sort_by_key(|u| u.order_index);
        units
    }

    pub fn add_stage_unit(&self, unit: NewStageUnit) -> Option<StageUnit> {
        self.created("stage unit", self.backend.insert_stage_unit(unit))
    }

    pub fn remove_stage_unit(&self, id: &str) -> bool {
        self.removed("stage unit", self.backend.delete_stage_unit(id))
    }

    // =========================================================================
    // Settings
    // =========================================================================

    /// The settings singleton, defaults on any failure
    pub fn settings(&self) -> SiteSettings {
        match self.backend.fetch_settings() {
            Ok(settings) => settings,
            Err(e) => {
                warn!(backend = self.backend.label(), error = %e,
                    "fetching settings failed, using local snapshot");
                self.fallback.snapshot_or_default().settings
            }
        }
    }

    pub fn set_total_shows(&self, total_shows: u32) -> bool {
        match self.backend.upsert_total_shows(total_shows) {
            Ok(()) => true,
            Err(e) => {
                warn!(backend = self.backend.label(), error = %e, "updating total shows failed");
                false
            }
        }
    }

    // =========================================================================
    // Export / import (local snapshot only)
    // =========================================================================

    /// Serialize the local snapshot for download
    pub fn export_json(&self) -> Result<String> {
        self.fallback.export_json()
    }

    /// Replace the local snapshot with a user-supplied document
    pub fn import_json(&self, json: &str) -> bool {
        match self.fallback.import_json(json) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "importing snapshot failed");
                false
            }
        }
    }

    /// Delete the local snapshot document
    pub fn clear_local(&self) -> Result<()> {
        self.fallback.clear()
    }
}

// =============================================================================
// Tests
// =============================================================================
