use crate::api::{API_FOLLOWER_LIMIT, MAX_PAGE_SIZE};
use crate::config::types::FetchOptions;

/// Applies the service caps to a set of fetch options
///
/// Order matters and matches the documented behavior:
/// 1. `max_followers` is capped at the API hard limit (8200)
/// 2. `page_size` is capped at the maximum page size (200)
/// 3. `page_size` is further reduced to `max_followers` so a single page
///    never requests more than the whole run will keep
pub fn clamp_options(options: FetchOptions) -> FetchOptions {
    let max_followers = options.max_followers.min(API_FOLLOWER_LIMIT);
    let page_size = options.page_size.min(MAX_PAGE_SIZE).min(max_followers);
    FetchOptions {
        page_size,
        max_followers,
        caching: options.caching,
    }
}

/// Clamps the fetch target to the server-reported follower count
///
/// Applied after resolving the user: there is no point requesting more
/// followers than the account has. The server reports the count as a JSON
/// number, so the value arrives as an f64.
pub fn clamp_target(server_count: f64, max_followers: u32) -> u32 {
    server_count.max(0.0).min(max_followers as f64) as u32
}
