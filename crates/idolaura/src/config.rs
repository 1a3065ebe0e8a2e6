//! Configuration constants for the idolaura crates

/// Application metadata
pub mod app {
    /// Application name (used for config directory, etc.)
    pub const NAME: &str = "idolaura";
}

/// Storage-related configuration
pub mod storage {
    /// File holding the full local content snapshot
    pub const DATA_FILE: &str = "site_data.json";

    /// File holding the persisted admin session
    pub const SESSION_FILE: &str = "session.json";
}

/// Network-related configuration
pub mod network {
    /// User agent for HTTP requests
    pub const USER_AGENT: &str = concat!("Idolaura/", env!("CARGO_PKG_VERSION"));

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Read timeout in seconds
    pub const READ_TIMEOUT_SECS: u64 = 30;

    /// Environment variable holding the remote backend base URL
    pub const BACKEND_URL_VAR: &str = "IDOLAURA_BACKEND_URL";

    /// Environment variable holding the remote backend anon key
    pub const BACKEND_KEY_VAR: &str = "IDOLAURA_BACKEND_KEY";
}

/// Remote table names, one per entity collection
pub mod tables {
    pub const GALLERY: &str = "gallery";
    pub const SCHEDULE: &str = "schedule";
    pub const MEDIA: &str = "media";
    pub const MILESTONES: &str = "milestones";
    pub const FUN_FACTS: &str = "fun_facts";
    pub const HASHTAGS: &str = "hashtags";
    pub const STAGE_UNITS: &str = "stage_units";
    pub const SETTINGS: &str = "settings";
}

/// Site content defaults
pub mod site {
    /// Fixed id of the settings singleton row
    pub const SETTINGS_ROW_ID: &str = "1";

    /// Total theater shows displayed when nothing is stored yet
    pub const TOTAL_SHOWS_DEFAULT: u32 = 44;
}
