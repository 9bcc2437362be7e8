//! Followrank: a SoundCloud follower ranking tool
//!
//! This crate resolves a SoundCloud username to an account id, pages through
//! the user's follower list up to the service-imposed cap, optionally caches
//! the raw result on disk, and computes an aggregate ranking score (the sum
//! of each follower's follower/following ratio).

pub mod api;
pub mod cache;
pub mod config;
pub mod fetch;
pub mod score;

use thiserror::Error;

/// Main error type for followrank operations
#[derive(Debug, Error)]
pub enum RankError {
    #[error("no user found for '{username}'")]
    UserNotFound { username: String },

    #[error("'{username}' resolved to a {kind}, not a user")]
    NotAUser { username: String, kind: String },

    #[error("incomplete user data from server for '{username}'")]
    IncompleteUser { username: String },

    #[error("request failed for {url}: {source}")]
    Transfer { url: String, source: reqwest::Error },

    #[error("malformed response from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}

/// Cache-specific errors
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to read cache file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("corrupt cache file {path}: {source}")]
    Corrupt {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to write cache file {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize cache entry: {source}")]
    Encode { source: serde_json::Error },
}

/// Result type alias for followrank operations
pub type Result<T> = std::result::Result<T, RankError>;

/// Result type alias for cache operations
pub type CacheResult<T> = std::result::Result<T, CacheError>;

// Re-export commonly used types
pub use api::{ApiClient, FetchResult, FollowerRecord, UserInfo};
pub use cache::CacheStore;
pub use config::FetchOptions;
pub use score::{calculate_score, ScoreReport};
