//! Fetch orchestration
//!
//! This module sequences a complete data retrieval:
//! 1. Consult the cache (when enabled); a hit is used as-is
//! 2. Resolve the username to an account
//! 3. Clamp the fetch target to the server-reported follower count
//! 4. Page through the followers endpoint
//! 5. Persist the result to the cache (when enabled)

mod pager;

pub use pager::{fetch_followers, plan_pages, PageRequest};

use crate::api::{ApiClient, FetchResult};
use crate::cache::CacheStore;
use crate::config::{clamp_target, FetchOptions};
use crate::Result;

/// Downloads all the information required for the score calculation
///
/// `options` must already be clamped (see [`FetchOptions::clamped`]). Any
/// adapter or cache error is fatal; no partial result is returned.
pub async fn download(
    client: &ApiClient,
    cache: &CacheStore,
    options: &FetchOptions,
    username: &str,
) -> Result<FetchResult> {
    if let Some(cached) = cache.load(username)? {
        println!(
            "Loading user data from cache: {}",
            cache.path_for(username).display()
        );
        return Ok(cached);
    }

    println!("Querying user '{}'...", username);
    let mut info = client.resolve_user(username).await?;
    println!(
        "\tuser id: {}\n\tfollowers count: {}",
        info.id, info.followers_count as u64
    );

    let target = clamp_target(info.followers_count, options.max_followers);
    info.followers_count = target as f64;

    println!("Retrieving followers ({})...", target);
    let followers = fetch_followers(client, info.id, target, options.page_size).await?;
    println!("\ttotal count: {}", followers.len());

    let result = FetchResult { info, followers };
    cache.save(username, &result)?;

    Ok(result)
}
