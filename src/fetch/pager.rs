//! Follower pagination
//!
//! Page planning is a pure function so the arithmetic (page count, offsets,
//! shrinking last page) can be tested without a server. The fetch loop walks
//! the plan strictly in order; the only early exit is an empty page, which
//! means the server has no more data at that offset.

use crate::api::{ApiClient, FollowerRecord};
use crate::Result;
use std::collections::HashMap;

/// One planned page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub offset: u32,
    pub limit: u32,
}

/// Computes the sequence of page requests for a fetch
///
/// `ceil(target / page_size)` pages are planned; page `p` starts at
/// `p * page_size` and the final page's limit shrinks to the exact
/// remainder so the last request does not over-fetch. The sum of all
/// planned limits equals `target`.
pub fn plan_pages(target: u32, page_size: u32) -> Vec<PageRequest> {
    if target == 0 || page_size == 0 {
        return Vec::new();
    }

    let max_pages = target.div_ceil(page_size);
    (0..max_pages)
        .map(|page| {
            let offset = page * page_size;
            PageRequest {
                offset,
                limit: page_size.min(target - offset),
            }
        })
        .collect()
}

/// Retrieves up to `target` followers of a user, one page at a time
///
/// Records are merged into a map keyed by follower id, so a duplicate id
/// across pages overwrites the earlier record (last write wins). Progress is
/// reported on stdout after each page. Any adapter error aborts the whole
/// fetch; no partial result is returned.
pub async fn fetch_followers(
    client: &ApiClient,
    user_id: u64,
    target: u32,
    page_size: u32,
) -> Result<HashMap<u64, FollowerRecord>> {
    let plan = plan_pages(target, page_size);
    let total_pages = plan.len();
    let mut followers = HashMap::new();

    for (index, page) in plan.into_iter().enumerate() {
        let percent = 100.0 * (index as f64 + 1.0) / total_pages as f64;
        println!(
            "\tdownloading from offset {} ({:.2}%)",
            page.offset, percent
        );

        let records = client
            .list_followers(user_id, page.offset, page.limit)
            .await?;
        if records.is_empty() {
            tracing::debug!("no records at offset {}, server exhausted", page.offset);
            break;
        }

        for record in records {
            followers.insert(record.id, record);
        }
    }

    Ok(followers)
}
