//! SoundCloud API adapter
//!
//! This module wraps the outbound HTTP calls the tool makes:
//! - Resolving a username to an account via `/resolve`
//! - Listing a page of followers via `/users/{id}/followers`
//!
//! The adapter performs no retries: any transport or decoding failure is
//! fatal to the whole run.

mod client;
mod model;

pub use client::{
    ApiClient, API_FOLLOWER_LIMIT, CLIENT_ID, DEFAULT_BASE_URL, MAX_OFFSET, MAX_PAGE_SIZE,
    PROFILE_URL_BASE,
};
pub use model::{FetchResult, FollowerRecord, ResolvedEntity, UserInfo};
