//! Wire and domain types for the SoundCloud API
//!
//! The raw `/resolve` payload is kept separate from the validated
//! [`UserInfo`] so that incomplete or non-user responses can be rejected
//! with a specific error instead of a generic decode failure.

use crate::{RankError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw entity returned by the `/resolve` endpoint
///
/// Every field except `kind` is optional at the wire level; validation
/// happens in [`ResolvedEntity::into_user_info`].
#[derive(Debug, Clone, Deserialize)]
pub struct ResolvedEntity {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub followers_count: Option<f64>,
}

impl ResolvedEntity {
    /// Validates the resolved entity and converts it into a [`UserInfo`]
    ///
    /// # Errors
    ///
    /// * [`RankError::NotAUser`] - the entity resolved to something other
    ///   than a user account (e.g. a track or playlist)
    /// * [`RankError::IncompleteUser`] - the response lacks id, username,
    ///   or followers_count
    pub fn into_user_info(self, requested: &str) -> Result<UserInfo> {
        match self.kind.as_deref() {
            Some("user") => {}
            Some(kind) => {
                return Err(RankError::NotAUser {
                    username: requested.to_string(),
                    kind: kind.to_string(),
                })
            }
            None => {
                return Err(RankError::IncompleteUser {
                    username: requested.to_string(),
                })
            }
        }

        match (self.id, self.username, self.followers_count) {
            (Some(id), Some(username), Some(followers_count)) => Ok(UserInfo {
                id,
                username,
                // The server reports this as a JSON number; treat it as a
                // non-negative count.
                followers_count: followers_count.max(0.0),
            }),
            _ => Err(RankError::IncompleteUser {
                username: requested.to_string(),
            }),
        }
    }
}

/// Basic information about the resolved user
///
/// Immutable after creation, except that the fetch pipeline overwrites
/// `followers_count` with the clamped fetch target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: u64,
    pub username: String,
    pub followers_count: f64,
}

/// One follower as returned by the followers endpoint
///
/// All fields are required; a follower entry missing any of them is a
/// malformed response and fails the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowerRecord {
    pub id: u64,
    pub username: String,
    pub followers_count: f64,
    pub followings_count: f64,
}

/// The complete result of one fetch run
///
/// Followers are keyed by id, so a duplicate id across pages overwrites the
/// earlier record rather than inflating the count. This is the unit that is
/// persisted to the cache and consumed by the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResult {
    pub info: UserInfo,
    pub followers: HashMap<u64, FollowerRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(kind: Option<&str>) -> ResolvedEntity {
        ResolvedEntity {
            kind: kind.map(String::from),
            id: Some(42),
            username: Some("alice".to_string()),
            followers_count: Some(128.0),
        }
    }

    #[test]
    fn test_resolved_user_converts() {
        let info = resolved(Some("user")).into_user_info("alice").unwrap();
        assert_eq!(info.id, 42);
        assert_eq!(info.username, "alice");
        assert_eq!(info.followers_count, 128.0);
    }

    #[test]
    fn test_non_user_entity_rejected() {
        let err = resolved(Some("track")).into_user_info("alice").unwrap_err();
        assert!(matches!(err, RankError::NotAUser { kind, .. } if kind == "track"));
    }

    #[test]
    fn test_missing_kind_rejected() {
        let err = resolved(None).into_user_info("alice").unwrap_err();
        assert!(matches!(err, RankError::IncompleteUser { .. }));
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut entity = resolved(Some("user"));
        entity.followers_count = None;
        let err = entity.into_user_info("alice").unwrap_err();
        assert!(matches!(err, RankError::IncompleteUser { .. }));
    }

    #[test]
    fn test_negative_followers_count_clamped() {
        let mut entity = resolved(Some("user"));
        entity.followers_count = Some(-5.0);
        let info = entity.into_user_info("alice").unwrap();
        assert_eq!(info.followers_count, 0.0);
    }

    #[test]
    fn test_follower_record_requires_all_fields() {
        let json = r#"{"id": 1, "username": "bob", "followers_count": 10.0}"#;
        let result: serde_json::Result<FollowerRecord> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_follower_record_ignores_extra_fields() {
        let json = r#"{
            "id": 1,
            "username": "bob",
            "followers_count": 10.0,
            "followings_count": 5.0,
            "avatar_url": "https://example.com/a.png"
        }"#;
        let record: FollowerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.followings_count, 5.0);
    }
}
