//! Remote table store
//!
//! Implementation of `StoreBackend` against a hosted PostgREST-style
//! backend: one table per collection, selects ordered server-side,
//! inserts echoing the stored row back, deletes by id filter. Writes are
//! authorized by the backend session; this module attaches credentials
//! and otherwise performs no checks of its own.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;

use crate::config::network::{BACKEND_KEY_VAR, BACKEND_URL_VAR};
use crate::config::site::SETTINGS_ROW_ID;
use crate::config::tables;
use crate::data::backend::StoreBackend;
use crate::data::types::{
    FunFact, GalleryPhoto, Hashtag, MediaItem, Milestone, NewFunFact, NewHashtag, NewMediaItem,
    NewMilestone, NewPhoto, NewScheduleEvent, NewStageUnit, ScheduleEvent, SiteSettings, StageUnit,
};
use crate::error::{Result, SiteError};
use crate::network::HttpClient;

// =============================================================================
// RemoteConfig
// =============================================================================

/// Connection parameters for the remote backend
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteConfig {
    /// Base URL of the backend (no trailing slash)
    pub url: String,
    /// Public anon key, sent with every request
    pub anon_key: String,
}

impl RemoteConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Read connection parameters from the environment
    ///
    /// Both variables must be present and non-empty; otherwise the caller
    /// stays on the local store.
    pub fn from_env() -> Option<Self> {
        let url = env::var(BACKEND_URL_VAR).ok()?;
        let key = env::var(BACKEND_KEY_VAR).ok()?;
        if url.trim().is_empty() || key.trim().is_empty() {
            return None;
        }
        Some(Self::new(url.trim(), key.trim()))
    }

    /// REST endpoint for a table
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// Auth endpoint (sign-in, sign-out)
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path)
    }
}

// =============================================================================
// RemoteBackend
// =============================================================================

/// Storage backend over the remote tables
pub struct RemoteBackend {
    client: HttpClient,
    config: RemoteConfig,
    /// Full Authorization header value; the session token when an admin
    /// is signed in, the anon key otherwise
    auth_header: String,
}

impl RemoteBackend {
    pub fn new(config: RemoteConfig, session_token: Option<String>) -> Result<Self> {
        let token = session_token.unwrap_or_else(|| config.anon_key.clone());
        Ok(Self {
            client: HttpClient::new()?,
            auth_header: format!("Bearer {token}"),
            config,
        })
    }

    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    fn headers<'a>(&'a self, extra: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
        let mut headers = vec![
            ("apikey", self.config.anon_key.as_str()),
            ("Authorization", self.auth_header.as_str()),
        ];
        headers.extend_from_slice(extra);
        headers
    }

    /// `GET /rest/v1/{table}?select=*&order={order}`
    fn select<T: DeserializeOwned>(&self, table: &str, order: &str) -> Result<Vec<T>> {
        let url = format!("{}?select=*&order={}", self.config.rest_url(table), order);
        self.client.get_json(&url, &self.headers(&[]))
    }

    /// `POST /rest/v1/{table}`, returning the stored row
    fn insert_row<T: DeserializeOwned, B: Serialize>(&self, table: &str, row: &B) -> Result<T> {
        let rows: Vec<T> = self.client.post_json(
            &self.config.rest_url(table),
            &self.headers(&[("Prefer", "return=representation")]),
            &[row],
        )?;
        rows.into_iter()
            .next()
            .ok_or_else(|| SiteError::Response(format!("insert into '{table}' returned no rows")))
    }

    /// `DELETE /rest/v1/{table}?id=eq.{id}`
    fn delete_row(&self, table: &str, id: &str) -> Result<()> {
        let url = format!("{}?id=eq.{}", self.config.rest_url(table), id);
        self.client.delete(&url, &self.headers(&[]))
    }
}

impl StoreBackend for RemoteBackend {
    fn label(&self) -> &'static str {
        "remote"
    }

    fn fetch_photos(&self) -> Result<Vec<GalleryPhoto>> {
        self.select(tables::GALLERY, "added_at.desc")
    }

    fn insert_photo(&self, photo: NewPhoto) -> Result<GalleryPhoto> {
        self.insert_row(tables::GALLERY, &photo)
    }

    fn delete_photo(&self, id: &str) -> Result<()> {
        self.delete_row(tables::GALLERY, id)
    }

    fn fetch_schedule(&self) -> Result<Vec<ScheduleEvent>> {
        self.select(tables::SCHEDULE, "date.asc")
    }

    fn insert_schedule_event(&self, event: NewScheduleEvent) -> Result<ScheduleEvent> {
        self.insert_row(tables::SCHEDULE, &event)
    }

    fn delete_schedule_event(&self, id: &str) -> Result<()> {
        self.delete_row(tables::SCHEDULE, id)
    }

    fn fetch_media(&self) -> Result<Vec<MediaItem>> {
        self.select(tables::MEDIA, "added_at.desc")
    }

    fn insert_media_item(&self, item: NewMediaItem) -> Result<MediaItem> {
        self.insert_row(tables::MEDIA, &item)
    }

    fn delete_media_item(&self, id: &str) -> Result<()> {
        self.delete_row(tables::MEDIA, id)
    }

    fn fetch_milestones(&self) -> Result<Vec<Milestone>> {
        self.select(tables::MILESTONES, "order_index.asc")
    }

    fn insert_milestone(&self, milestone: NewMilestone) -> Result<Milestone> {
        self.insert_row(tables::MILESTONES, &milestone)
    }

    fn delete_milestone(&self, id: &str) -> Result<()> {
        self.delete_row(tables::MILESTONES, id)
    }

    fn fetch_fun_facts(&self) -> Result<Vec<FunFact>> {
        self.select(tables::FUN_FACTS, "order_index.asc")
    }

    fn insert_fun_fact(&self, fact: NewFunFact) -> Result<FunFact> {
        self.insert_row(tables::FUN_FACTS, &fact)
    }

    fn delete_fun_fact(&self, id: &str) -> Result<()> {
        self.delete_row(tables::FUN_FACTS, id)
    }

    fn fetch_hashtags(&self) -> Result<Vec<Hashtag>> {
        self.select(tables::HASHTAGS, "order_index.asc")
    }

    fn insert_hashtag(&self, hashtag: NewHashtag) -> Result<Hashtag> {
        self.insert_row(tables::HASHTAGS, &hashtag)
    }

    fn delete_hashtag(&self, id: &str) -> Result<()> {
        self.delete_row(tables::HASHTAGS, id)
    }

    fn fetch_stage_units(&self) -> Result<Vec<StageUnit>> {
        self.select(tables::STAGE_UNITS, "order_index.asc")
    }

    fn insert_stage_unit(&self, unit: NewStageUnit) -> Result<StageUnit> {
        self.insert_row(tables::STAGE_UNITS, &unit)
    }

    fn delete_stage_unit(&self, id: &str) -> Result<()> {
        self.delete_row(tables::STAGE_UNITS, id)
    }

    fn fetch_settings(&self) -> Result<SiteSettings> {
        let url = format!(
            "{}?select=*&id=eq.{}",
            self.config.rest_url(tables::SETTINGS),
            SETTINGS_ROW_ID
        );
        let rows: Vec<SiteSettings> = self.client.get_json(&url, &self.headers(&[]))?;
        rows.into_iter()
            .next()
            .ok_or_else(|| SiteError::Response("settings row not found".to_string()))
    }

    fn upsert_total_shows(&self, total_shows: u32) -> Result<()> {
        let row = SiteSettings {
            id: SETTINGS_ROW_ID.to_string(),
            total_shows,
        };
        self.client.post_unit(
            &self.config.rest_url(tables::SETTINGS),
            &self.headers(&[("Prefer", "resolution=merge-duplicates")]),
            &[row],
        )
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::types::{EventKind, MediaKind};

    fn sample_config() -> RemoteConfig {
        RemoteConfig::new("https://db.example.com", "anon-key")
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = RemoteConfig::new("https://db.example.com/", "k");
        assert_eq!(config.url, "https://db.example.com");
    }

    #[test]
    fn test_rest_url_building() {
        let config = sample_config();
        assert_eq!(
            config.rest_url("gallery"),
            "https://db.example.com/rest/v1/gallery"
        );
    }

    #[test]
    fn test_auth_url_building() {
        let config = sample_config();
        assert_eq!(
            config.auth_url("token?grant_type=password"),
            "https://db.example.com/auth/v1/token?grant_type=password"
        );
    }

    #[test]
    fn test_backend_uses_anon_key_without_session() {
        let backend = RemoteBackend::new(sample_config(), None).unwrap();
        assert_eq!(backend.auth_header, "Bearer anon-key");
    }

    #[test]
    fn test_backend_prefers_session_token() {
        let backend = RemoteBackend::new(sample_config(), Some("jwt-123".to_string())).unwrap();
        assert_eq!(backend.auth_header, "Bearer jwt-123");
    }

    #[test]
    fn test_headers_carry_credentials() {
        let backend = RemoteBackend::new(sample_config(), None).unwrap();
        let headers = backend.headers(&[("Prefer", "return=representation")]);
        assert!(headers.contains(&("apikey", "anon-key")));
        assert!(headers.contains(&("Authorization", "Bearer anon-key")));
        assert!(headers.contains(&("Prefer", "return=representation")));
    }

    #[test]
    fn test_insert_payload_is_row_array() {
        // Inserts go up as a one-element array, matching the table API
        let event = NewScheduleEvent::new("Show", "2026-02-15").with_kind(EventKind::Tv);
        let json = serde_json::to_string(&[&event]).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"type\":\"TV\""));
    }

    #[test]
    fn test_settings_upsert_row_shape() {
        let row = SiteSettings {
            id: SETTINGS_ROW_ID.to_string(),
            total_shows: 48,
        };
        let json = serde_json::to_string(&[row]).unwrap();
        assert_eq!(json, r#"[{"id":"1","total_shows":48}]"#);
    }

    // ---- Integration tests (require a configured backend, marked #[ignore]) ----

    fn env_backend() -> Option<RemoteBackend> {
        RemoteConfig::from_env().map(|c| RemoteBackend::new(c, None).unwrap())
    }

    #[test]
    #[ignore]
    fn test_integration_fetch_photos() {
        let backend = env_backend().expect("backend env vars not set");
        let photos = backend.fetch_photos().unwrap();
        // Newest first per the server-side ordering
        for pair in photos.windows(2) {
            assert!(pair[0].added_at >= pair[1].added_at);
        }
    }

    #[test]
    #[ignore]
    fn test_integration_media_round_trip() {
        let backend = env_backend().expect("backend env vars not set");
        let item = backend
            .insert_media_item(NewMediaItem::new(
                "integration test",
                MediaKind::Article,
                "https://example.com/article",
            ))
            .unwrap();
        assert!(!item.id.is_empty());
        backend.delete_media_item(&item.id).unwrap();
    }
}
