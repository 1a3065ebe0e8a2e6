//! Error types for idolaura
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// Main error type for the idolaura core
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("{}", friendly_network_error(.0))]
    Network(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Unexpected backend response: {0}")]
    Response(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for idolaura
pub type Result<T> = std::result::Result<T, SiteError>;

fn friendly_network_error(e: &reqwest::Error) -> String {
    if e.is_builder() {
        return match e.url() {
            Some(url) => format!("Invalid URL: {url}"),
            None => "Invalid URL".to_string(),
        };
    }
    if e.is_connect() {
        let host = e
            .url()
            .and_then(|u| u.host_str())
            .unwrap_or("the content backend");
        return format!("Could not connect to {host}");
    }
    if e.is_timeout() {
        return "Request timed out".to_string();
    }
    if e.is_decode() {
        return "Invalid response from the content backend".to_string();
    }
    format!("Network error: {e}")
}
