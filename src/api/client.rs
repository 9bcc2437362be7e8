//! HTTP client for the SoundCloud API
//!
//! This module builds the underlying reqwest client and implements the two
//! calls the tool needs: resolving a username and listing a page of
//! followers. The client is constructed once and passed explicitly to the
//! code that needs it; there is no global handle.

use crate::api::model::{FollowerRecord, ResolvedEntity, UserInfo};
use crate::{RankError, Result};
use reqwest::{Client, StatusCode, Url};
use std::time::Duration;

/// Base URL of the SoundCloud API
pub const DEFAULT_BASE_URL: &str = "https://api.soundcloud.com";

/// Base URL for public profile pages, used to build `/resolve` queries
pub const PROFILE_URL_BASE: &str = "https://soundcloud.com";

/// Fixed API client identifier
pub const CLIENT_ID: &str = "7c60921f5c70d104f9586f40149f02f2";

/// Maximum page size accepted by the followers endpoint
pub const MAX_PAGE_SIZE: u32 = 200;

/// Maximum offset accepted by the followers endpoint
pub const MAX_OFFSET: u32 = 8000;

/// Hard cap on retrievable followers (max offset plus one full page)
pub const API_FOLLOWER_LIMIT: u32 = MAX_OFFSET + MAX_PAGE_SIZE;

/// SoundCloud API client
///
/// Holds a configured [`reqwest::Client`], the API base URL, and the client
/// identifier sent with every request.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    client_id: String,
}

impl ApiClient {
    /// Creates a client against the production API
    pub fn new() -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against an arbitrary base URL
    ///
    /// Used by tests to point the client at a mock server.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("followrank/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .gzip(true)
            .brotli(true)
            .build()
            .map_err(RankError::Client)?;

        Ok(ApiClient {
            http,
            base_url: Url::parse(base_url)?,
            client_id: CLIENT_ID.to_string(),
        })
    }

    /// Resolves a username to basic account information
    ///
    /// # Errors
    ///
    /// * [`RankError::UserNotFound`] - the server knows no such profile
    /// * [`RankError::NotAUser`] / [`RankError::IncompleteUser`] - the
    ///   profile resolved to something that is not a usable user account
    /// * [`RankError::Transfer`] / [`RankError::Decode`] - transport failure
    ///   or malformed response body
    pub async fn resolve_user(&self, username: &str) -> Result<UserInfo> {
        let profile_url = format!("{}/{}", PROFILE_URL_BASE, username);
        let url = Url::parse_with_params(
            self.base_url.join("resolve")?.as_str(),
            &[
                ("url", profile_url.as_str()),
                ("client_id", self.client_id.as_str()),
            ],
        )?;

        tracing::debug!("resolving '{}' via {}", username, url);
        let response = self.http.get(url.clone()).send().await.map_err(|source| {
            RankError::Transfer {
                url: url.to_string(),
                source,
            }
        })?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(RankError::UserNotFound {
                username: username.to_string(),
            });
        }

        let response = response
            .error_for_status()
            .map_err(|source| RankError::Transfer {
                url: url.to_string(),
                source,
            })?;
        let body = response.text().await.map_err(|source| RankError::Transfer {
            url: url.to_string(),
            source,
        })?;

        let entity: ResolvedEntity =
            serde_json::from_str(&body).map_err(|source| RankError::Decode {
                url: url.to_string(),
                source,
            })?;
        entity.into_user_info(username)
    }

    /// Fetches one page of followers for the given account id
    ///
    /// `limit` and `offset` are clamped to the service caps before the call
    /// is made. An empty page is the normal pagination terminator, not an
    /// error.
    pub async fn list_followers(
        &self,
        user_id: u64,
        offset: u32,
        limit: u32,
    ) -> Result<Vec<FollowerRecord>> {
        let offset = offset.min(MAX_OFFSET);
        let limit = limit.min(MAX_PAGE_SIZE);

        let path = format!("users/{}/followers", user_id);
        let url = Url::parse_with_params(
            self.base_url.join(&path)?.as_str(),
            &[
                ("offset", offset.to_string()),
                ("limit", limit.to_string()),
                ("client_id", self.client_id.clone()),
            ],
        )?;

        tracing::debug!(offset, limit, "fetching follower page via {}", url);
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|source| RankError::Transfer {
                url: url.to_string(),
                source,
            })?;
        let body = response.text().await.map_err(|source| RankError::Transfer {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_str(&body).map_err(|source| RankError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
