//! Local snapshot store
//!
//! Persistence path used when no remote backend is configured: the whole
//! site lives in one JSON document. Reads merge partial documents onto
//! defaults; writes re-serialize the full document. There is no locking,
//! so two processes writing at once can lose updates — accepted for a
//! single-admin fallback store.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::config::storage::DATA_FILE;
use crate::data::backend::StoreBackend;
use crate::data::storage;
use crate::data::types::{
    generate_id, FunFact, GalleryPhoto, Hashtag, MediaItem, Milestone, NewFunFact, NewHashtag,
    NewMediaItem, NewMilestone, NewPhoto, NewScheduleEvent, NewStageUnit, ScheduleEvent, SiteData,
    SiteSettings, StageUnit,
};
use crate::error::Result;

// =============================================================================
// LocalStore - snapshot document on disk
// =============================================================================

/// The single-document snapshot store
#[derive(Debug, Clone)]
pub struct LocalStore {
    path: PathBuf,
}

impl LocalStore {
    /// Open the store at the default config-directory location
    pub fn open_default() -> Result<Self> {
        Ok(Self {
            path: storage::data_path(DATA_FILE)?,
        })
    }

    /// Open the store at a specific path (tests, custom locations)
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot; a missing or empty file is the default snapshot
    pub fn snapshot(&self) -> Result<SiteData> {
        Ok(storage::load_from::<SiteData>(&self.path)?.unwrap_or_default())
    }

    /// Read the snapshot, degrading to defaults on any failure
    pub fn snapshot_or_default(&self) -> SiteData {
        match self.snapshot() {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "local snapshot unreadable, using defaults");
                SiteData::default()
            }
        }
    }

    /// Replace the snapshot wholesale
    pub fn write(&self, data: &SiteData) -> Result<()> {
        storage::save_to(&self.path, data)
    }

    /// Read-modify-write helper for single mutations
    fn update<F>(&self, mutate: F) -> Result<()>
    where
        F: FnOnce(&mut SiteData),
    {
        let mut data = self.snapshot()?;
        mutate(&mut data);
        self.write(&data)
    }

    /// Serialize the current snapshot for download
    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot_or_default())?)
    }

    /// Replace the snapshot with a user-supplied document
    ///
    /// Partial documents are filled with defaults at parse time, so a
    /// re-import of an export is exact while hand-edited files still load.
    pub fn import_json(&self, json: &str) -> Result<()> {
        let data: SiteData = serde_json::from_str(json)?;
        self.write(&data)
    }

    /// Delete the snapshot document entirely
    pub fn clear(&self) -> Result<()> {
        storage::delete_at(&self.path)
    }
}

// =============================================================================
// LocalBackend - StoreBackend over the snapshot
// =============================================================================

/// Storage backend over the local snapshot document
pub struct LocalBackend {
    store: LocalStore,
}

impl LocalBackend {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }
}

impl StoreBackend for LocalBackend {
    fn label(&self) -> &'static str {
        "local"
    }

    fn fetch_photos(&self) -> Result<Vec<GalleryPhoto>> {
        Ok(self.store.snapshot()?.gallery)
    }

    fn insert_photo(&self, photo: NewPhoto) -> Result<GalleryPhoto> {
        let record = photo.into_photo(generate_id());
        let stored = record.clone();
        self.store.update(|data| data.gallery.push(record))?;
        Ok(stored)
    }

    fn delete_photo(&self, id: &str) -> Result<()> {
        self.store.update(|data| data.gallery.retain(|p| p.id != id))
    }

    fn fetch_schedule(&self) -> Result<Vec<ScheduleEvent>> {
        Ok(self.store.snapshot()?.schedule)
    }

    fn insert_schedule_event(&self, event: NewScheduleEvent) -> Result<ScheduleEvent> {
        let record = event.into_event(generate_id());
        let stored = record.clone();
        self.store.update(|data| data.schedule.push(record))?;
        Ok(stored)
    }

    fn delete_schedule_event(&self, id: &str) -> Result<()> {
        self.store.update(|data| data.schedule.retain(|e| e.id != id))
    }

    fn fetch_media(&self) -> Result<Vec<MediaItem>> {
        Ok(self.store.snapshot()?.media)
    }

    fn insert_media_item(&self, item: NewMediaItem) -> Result<MediaItem> {
        let record = item.into_item(generate_id());
        let stored = record.clone();
        self.store.update(|data| data.media.push(record))?;
        Ok(stored)
    }

    fn delete_media_item(&self, id: &str) -> Result<()> {
        self.store.update(|data| data.media.retain(|m| m.id != id))
    }

    fn fetch_milestones(&self) -> Result<Vec<Milestone>> {
        Ok(self.store.snapshot()?.milestones)
    }

    fn insert_milestone(&self, milestone: NewMilestone) -> Result<Milestone> {
        let record = milestone.into_milestone(generate_id());
        let stored = record.clone();
        self.store.update(|data| data.milestones.push(record))?;
        Ok(stored)
    }

    fn delete_milestone(&self, id: &str) -> Result<()> {
        self.store.update(|data| data.milestones.retain(|m| m.id != id))
    }

    fn fetch_fun_facts(&self) -> Result<Vec<FunFact>> {
        Ok(self.store.snapshot()?.fun_facts)
    }

    fn insert_fun_fact(&self, fact: NewFunFact) -> Result<FunFact> {
        let record = fact.into_fact(generate_id());
        let stored = record.clone();
        self.store.update(|data| data.fun_facts.push(record))?;
        Ok(stored)
    }

    fn delete_fun_fact(&self, id: &str) -> Result<()> {
        self.store.update(|data| data.fun_facts.retain(|f| f.id != id))
    }

    fn fetch_hashtags(&self) -> Result<Vec<Hashtag>> {
        Ok(self.store.snapshot()?.hashtags)
    }

    fn insert_hashtag(&self, hashtag: NewHashtag) -> Result<Hashtag> {
        let record = hashtag.into_hashtag(generate_id());
        let stored = record.clone();
        self.store.update(|data| data.hashtags.push(record))?;
        Ok(stored)
    }

    fn delete_hashtag(&self, id: &str) -> Result<()> {
        self.store.update(|data| data.hashtags.retain(|h| h.id != id))
    }

    fn fetch_stage_units(&self) -> Result<Vec<StageUnit>> {
        Ok(self.store.snapshot()?.stage_units)
    }

    fn insert_stage_unit(&self, unit: NewStageUnit) -> Result<StageUnit> {
        let record = unit.into_unit(generate_id());
        let stored = record.clone();
        self.store.update(|data| data.stage_units.push(record))?;
        Ok(stored)
    }

    fn delete_stage_unit(&self, id: &str) -> Result<()> {
        self.store.update(|data| data.stage_units.retain(|u| u.id != id))
    }

    fn fetch_settings(&self) -> Result<SiteSettings> {
        Ok(self.store.snapshot()?.settings)
    }

    fn upsert_total_shows(&self, total_shows: u32) -> Result<()> {
        self.store.update(|data| data.settings.total_shows = total_shows)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::{EventKind, MediaKind};
    use std::env::temp_dir;
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_path() -> PathBuf {
        let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        temp_dir().join(format!("idolaura_local_test_{}.json", id))
    }

    #[test]
    fn test_snapshot_missing_file_is_default() {
        let store = LocalStore::at(temp_path());
        let data = store.snapshot().unwrap();
        assert_eq!(data, SiteData::default());
    }

    #[test]
    fn test_write_and_snapshot_round_trip() {
        let path = temp_path();
        let store = LocalStore::at(&path);

        let mut data = SiteData::default();
        data.settings.total_shows = 61;
        store.write(&data).unwrap();

        assert_eq!(store.snapshot().unwrap().settings.total_shows, 61);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_document_merges_onto_defaults() {
        let path = temp_path();
        fs::write(&path, r#"{"schedule": [], "settings": {"total_shows": 10}}"#).unwrap();

        let store = LocalStore::at(&path);
        let data = store.snapshot().unwrap();
        assert_eq!(data.settings.total_shows, 10);
        assert!(data.gallery.is_empty());
        assert!(data.hashtags.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_snapshot_or_default_masks_corrupt_file() {
        let path = temp_path();
        fs::write(&path, "{ definitely not json").unwrap();

        let store = LocalStore::at(&path);
        assert!(store.snapshot().is_err());
        assert_eq!(store.snapshot_or_default(), SiteData::default());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_export_import_round_trip() {
        let path = temp_path();
        let store = LocalStore::at(&path);

        let backend = LocalBackend::new(store.clone());
        backend.insert_photo(NewPhoto::new("https://p.example/a.jpg")).unwrap();
        backend
            .insert_schedule_event(
                NewScheduleEvent::new("Show", "2026-02-15").with_kind(EventKind::Special),
            )
            .unwrap();
        backend.upsert_total_shows(50).unwrap();

        let exported = store.export_json().unwrap();
        let before = store.snapshot().unwrap();

        store.clear().unwrap();
        assert_eq!(store.snapshot().unwrap(), SiteData::default());

        store.import_json(&exported).unwrap();
        assert_eq!(store.snapshot().unwrap(), before);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_import_partial_document_fills_defaults() {
        let path = temp_path();
        let store = LocalStore::at(&path);

        store.import_json(r#"{"settings": {"total_shows": 7}}"#).unwrap();
        let data = store.snapshot().unwrap();
        assert_eq!(data.settings.total_shows, 7);
        assert!(data.media.is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_import_malformed_errors() {
        let path = temp_path();
        let store = LocalStore::at(&path);
        assert!(store.import_json("[not json").is_err());
        // Nothing was written
        assert!(!path.exists());
    }

    #[test]
    fn test_insert_assigns_numeric_string_id() {
        let path = temp_path();
        let backend = LocalBackend::new(LocalStore::at(&path));

        let photo = backend.insert_photo(NewPhoto::new("https://p.example/b.jpg")).unwrap();
        assert!(photo.id.chars().all(|c| c.is_ascii_digit()));

        let fetched = backend.fetch_photos().unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0], photo);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_delete_removes_only_matching_id() {
        let path = temp_path();
        let backend = LocalBackend::new(LocalStore::at(&path));

        let keep = backend
            .insert_media_item(NewMediaItem::new("Keep", MediaKind::Video, "https://k.example"))
            .unwrap();
        let gone = backend
            .insert_media_item(NewMediaItem::new("Gone", MediaKind::Audio, "https://g.example"))
            .unwrap();

        backend.delete_media_item(&gone.id).unwrap();

        let fetched = backend.fetch_media().unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].id, keep.id);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_delete_unknown_id_is_ok() {
        let path = temp_path();
        let backend = LocalBackend::new(LocalStore::at(&path));
        backend.delete_hashtag("nope").unwrap();
    }

    #[test]
    fn test_settings_upsert_persists() {
        let path = temp_path();
        let backend = LocalBackend::new(LocalStore::at(&path));

        assert_eq!(backend.fetch_settings().unwrap().total_shows, 44);
        backend.upsert_total_shows(45).unwrap();
        assert_eq!(backend.fetch_settings().unwrap().total_shows, 45);
        // Fixed row id is preserved
        assert_eq!(backend.fetch_settings().unwrap().id, "1");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_collections_stay_independent() {
        let path = temp_path();
        let backend = LocalBackend::new(LocalStore::at(&path));

        backend.insert_fun_fact(NewFunFact::new("Fact", "Detail")).unwrap();
        backend.insert_milestone(NewMilestone::new("2024", "Debut", "First show")).unwrap();

        assert_eq!(backend.fetch_fun_facts().unwrap().len(), 1);
        assert_eq!(backend.fetch_milestones().unwrap().len(), 1);
        assert!(backend.fetch_hashtags().unwrap().is_empty());
        assert!(backend.fetch_stage_units().unwrap().is_empty());

        let _ = fs::remove_file(&path);
    }
}
