use crate::api::{API_FOLLOWER_LIMIT, MAX_PAGE_SIZE};
use crate::config::validation::clamp_options;

/// Options controlling a single fetch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Number of items requested per page (service cap: 200)
    pub page_size: u32,

    /// Maximum number of followers to retrieve (service cap: 8200)
    pub max_followers: u32,

    /// Whether the on-disk cache is consulted and written
    pub caching: bool,
}

impl FetchOptions {
    pub fn new(page_size: u32, max_followers: u32, caching: bool) -> Self {
        Self {
            page_size,
            max_followers,
            caching,
        }
    }

    /// Returns a copy with the service caps applied
    ///
    /// Must be called before any network request is made; the fetch pipeline
    /// assumes its inputs are already within bounds.
    pub fn clamped(self) -> Self {
        clamp_options(self)
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            page_size: MAX_PAGE_SIZE,
            max_followers: API_FOLLOWER_LIMIT,
            caching: true,
        }
    }
}
