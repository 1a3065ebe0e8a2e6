//! Data access
//!
//! Entity types, the storage backend abstraction, and the content store.

pub mod backend;
pub mod local;
pub mod remote;
pub mod storage;
pub mod store;
pub mod types;

// Re-export common types
pub use backend::StoreBackend;
pub use local::{LocalBackend, LocalStore};
pub use remote::{RemoteBackend, RemoteConfig};
pub use store::ContentStore;
pub use types::{
    generate_id, parse_event_date, EventKind, FunFact, GalleryPhoto, Hashtag, MediaItem, MediaKind,
    Milestone, NewFunFact, NewHashtag, NewMediaItem, NewMilestone, NewPhoto, NewScheduleEvent,
    NewStageUnit, ScheduleEvent, SiteData, SiteSettings, StageUnit,
};
