//! Entity types for site content
//!
//! Flat records shared by both storage backends. The JSON shape matches
//! the remote tables and the exported snapshot format, so everything here
//! round-trips through serde unchanged.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::site::{SETTINGS_ROW_ID, TOTAL_SHOWS_DEFAULT};

// =============================================================================
// Helper functions
// =============================================================================

/// Generate a locally-assigned record id
///
/// Unix time in milliseconds as a decimal string. Backend-assigned ids
/// replace these whenever the remote store handles the insert.
pub fn generate_id() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
        .to_string()
}

/// Parse a schedule date for sorting
///
/// Accepts ISO dates (`2026-02-15`) and the admin form's display format
/// (`Feb 15, 2026`). Returns `None` for anything else; callers keep
/// unparsable dates in insertion order.
pub fn parse_event_date(date: &str) -> Option<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(date, "%b %d, %Y"))
        .ok()
}

// =============================================================================
// Gallery
// =============================================================================

/// A photo in the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryPhoto {
    pub id: String,
    pub url: String,
    /// When the photo was added; newest photos are listed first
    pub added_at: DateTime<Utc>,
}

/// A photo about to be inserted (no id yet)
#[derive(Debug, Clone, Serialize)]
pub struct NewPhoto {
    pub url: String,
    pub added_at: DateTime<Utc>,
}

impl NewPhoto {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            added_at: Utc::now(),
        }
    }

    /// Build the stored record with an assigned id
    pub fn into_photo(self, id: String) -> GalleryPhoto {
        GalleryPhoto {
            id,
            url: self.url,
            added_at: self.added_at,
        }
    }
}

// =============================================================================
// Schedule
// =============================================================================

/// Schedule event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    Concert,
    #[serde(rename = "Fan Event")]
    FanEvent,
    #[serde(rename = "TV")]
    Tv,
    Special,
    Release,
}

impl EventKind {
    /// Get the display string (also the wire representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Concert => "Concert",
            Self::FanEvent => "Fan Event",
            Self::Tv => "TV",
            Self::Special => "Special",
            Self::Release => "Release",
        }
    }

    /// Parse from a user-supplied string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "concert" => Some(Self::Concert),
            "fan event" | "fan-event" | "fanevent" => Some(Self::FanEvent),
            "tv" => Some(Self::Tv),
            "special" => Some(Self::Special),
            "release" => Some(Self::Release),
            _ => None,
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An event on the schedule page
///
/// `date` and `time` are kept as entered ("Feb 15, 2026", "19:00 WIB");
/// sorting parses `date` via [`parse_event_date`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl ScheduleEvent {
    /// Parsed date, if the stored text is recognizable
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_event_date(&self.date)
    }
}

/// A schedule event about to be inserted (no id yet)
#[derive(Debug, Clone, Serialize)]
pub struct NewScheduleEvent {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl NewScheduleEvent {
    pub fn new(title: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            time: String::new(),
            location: String::new(),
            kind: EventKind::Concert,
            featured: false,
            link: None,
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Build the stored record with an assigned id
    pub fn into_event(self, id: String) -> ScheduleEvent {
        ScheduleEvent {
            id,
            title: self.title,
            date: self.date,
            time: self.time,
            location: self.location,
            kind: self.kind,
            featured: self.featured,
            link: self.link,
        }
    }
}

// =============================================================================
// Media
// =============================================================================

/// Media item category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Article,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Article => "article",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "video" => Some(Self::Video),
            "audio" => Some(Self::Audio),
            "article" => Some(Self::Article),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A linked video, audio piece, or article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// A media item about to be inserted (no id yet)
#[derive(Debug, Clone, Serialize)]
pub struct NewMediaItem {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub added_at: DateTime<Utc>,
}

impl NewMediaItem {
    pub fn new(title: impl Into<String>, kind: MediaKind, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            kind,
            url: url.into(),
            thumbnail: None,
            description: None,
            added_at: Utc::now(),
        }
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Build the stored record with an assigned id
    pub fn into_item(self, id: String) -> MediaItem {
        MediaItem {
            id,
            title: self.title,
            kind: self.kind,
            url: self.url,
            thumbnail: self.thumbnail,
            description: self.description,
            added_at: self.added_at,
        }
    }
}

// =============================================================================
// About-page collections
// =============================================================================

/// A career milestone on the about page timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub year: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub order_index: i32,
}

/// A milestone about to be inserted (no id yet)
#[derive(Debug, Clone, Serialize)]
pub struct NewMilestone {
    pub year: String,
    pub title: String,
    pub description: String,
    pub order_index: i32,
}

impl NewMilestone {
    pub fn new(
        year: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            year: year.into(),
            title: title.into(),
            description: description.into(),
            order_index: 0,
        }
    }

    pub fn with_order(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    pub fn into_milestone(self, id: String) -> Milestone {
        Milestone {
            id,
            year: self.year,
            title: self.title,
            description: self.description,
            order_index: self.order_index,
        }
    }
}

/// A fun fact card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunFact {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub order_index: i32,
}

/// A fun fact about to be inserted (no id yet)
#[derive(Debug, Clone, Serialize)]
pub struct NewFunFact {
    pub title: String,
    pub description: String,
    pub order_index: i32,
}

impl NewFunFact {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            order_index: 0,
        }
    }

    pub fn with_order(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    pub fn into_fact(self, id: String) -> FunFact {
        FunFact {
            id,
            title: self.title,
            description: self.description,
            order_index: self.order_index,
        }
    }
}

/// A fan hashtag with its usage label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hashtag {
    pub id: String,
    pub tag: String,
    pub label: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub is_ramadan: bool,
    #[serde(default)]
    pub order_index: i32,
}

/// A hashtag about to be inserted (no id yet)
#[derive(Debug, Clone, Serialize)]
pub struct NewHashtag {
    pub tag: String,
    pub label: String,
    pub emoji: String,
    pub is_ramadan: bool,
    pub order_index: i32,
}

impl NewHashtag {
    pub fn new(tag: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            label: label.into(),
            emoji: String::new(),
            is_ramadan: false,
            order_index: 0,
        }
    }

    pub fn with_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.emoji = emoji.into();
        self
    }

    pub fn ramadan(mut self, is_ramadan: bool) -> Self {
        self.is_ramadan = is_ramadan;
        self
    }

    pub fn with_order(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    pub fn into_hashtag(self, id: String) -> Hashtag {
        Hashtag {
            id,
            tag: self.tag,
            label: self.label,
            emoji: self.emoji,
            is_ramadan: self.is_ramadan,
            order_index: self.order_index,
        }
    }
}

/// A theater stage unit with its setlist and songs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageUnit {
    pub id: String,
    pub name: String,
    pub setlist: String,
    /// Gradient start color (hex)
    pub color_from: String,
    /// Gradient end color (hex)
    pub color_to: String,
    #[serde(default)]
    pub songs: Vec<String>,
    #[serde(default)]
    pub order_index: i32,
}

/// A stage unit about to be inserted (no id yet)
#[derive(Debug, Clone, Serialize)]
pub struct NewStageUnit {
    pub name: String,
    pub setlist: String,
    pub color_from: String,
    pub color_to: String,
    pub songs: Vec<String>,
    pub order_index: i32,
}

impl NewStageUnit {
    pub fn new(name: impl Into<String>, setlist: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            setlist: setlist.into(),
            color_from: "#f43f5e".to_string(),
            color_to: "#ec4899".to_string(),
            songs: Vec::new(),
            order_index: 0,
        }
    }

    pub fn with_colors(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.color_from = from.into();
        self.color_to = to.into();
        self
    }

    pub fn with_songs(mut self, songs: Vec<String>) -> Self {
        self.songs = songs;
        self
    }

    pub fn with_order(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    pub fn into_unit(self, id: String) -> StageUnit {
        StageUnit {
            id,
            name: self.name,
            setlist: self.setlist,
            color_from: self.color_from,
            color_to: self.color_to,
            songs: self.songs,
            order_index: self.order_index,
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Site-wide settings singleton
///
/// One fixed row; the only record type that supports in-place updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_settings_id")]
    pub id: String,
    #[serde(default = "default_total_shows")]
    pub total_shows: u32,
}

fn default_settings_id() -> String {
    SETTINGS_ROW_ID.to_string()
}

fn default_total_shows() -> u32 {
    TOTAL_SHOWS_DEFAULT
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: default_settings_id(),
            total_shows: default_total_shows(),
        }
    }
}

// =============================================================================
// SiteData - the full local snapshot
// =============================================================================

/// Everything the site stores, as one document
///
/// This is the local persistence format and the export/import format.
/// Every field defaults independently, so a partial document merges onto
/// the defaults when read back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteData {
    #[serde(default)]
    pub gallery: Vec<GalleryPhoto>,
    #[serde(default)]
    pub schedule: Vec<ScheduleEvent>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default, rename = "funFacts")]
    pub fun_facts: Vec<FunFact>,
    #[serde(default)]
    pub hashtags: Vec<Hashtag>,
    #[serde(default, rename = "stageUnits")]
    pub stage_units: Vec<StageUnit>,
    #[serde(default)]
    pub settings: SiteSettings,
}

// =============================================================================
// Tests
// =============================================================================
