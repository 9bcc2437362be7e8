//! Score calculation
//!
//! The ranking score is the sum over all fetched followers of
//! `followers_count / followings_count`. A follower with zero followings
//! would make that term undefined; such records are skipped and counted
//! separately so the driver can report them.

use crate::api::FetchResult;

/// Result of a score calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreReport {
    /// The aggregate score, at full precision
    pub score: f64,

    /// Number of followers that contributed to the score
    pub counted: usize,

    /// Number of followers skipped because they follow nobody
    pub skipped_zero_followings: usize,
}

/// Calculates the follower ranking score for a fetch result
///
/// Pure function of its input; repeated calls on the same data return the
/// same report.
pub fn calculate_score(data: &FetchResult) -> ScoreReport {
    let mut score = 0.0;
    let mut counted = 0;
    let mut skipped = 0;

    for follower in data.followers.values() {
        if follower.followings_count <= 0.0 {
            skipped += 1;
            continue;
        }
        score += follower.followers_count / follower.followings_count;
        counted += 1;
    }

    ScoreReport {
        score,
        counted,
        skipped_zero_followings: skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FollowerRecord, UserInfo};
    use std::collections::HashMap;

    fn result_with(records: Vec<(u64, f64, f64)>) -> FetchResult {
        let followers = records
            .into_iter()
            .map(|(id, followers_count, followings_count)| {
                (
                    id,
                    FollowerRecord {
                        id,
                        username: format!("user{}", id),
                        followers_count,
                        followings_count,
                    },
                )
            })
            .collect();
        FetchResult {
            info: UserInfo {
                id: 42,
                username: "alice".to_string(),
                followers_count: 0.0,
            },
            followers,
        }
    }

    #[test]
    fn test_single_follower_ratio() {
        // 10 followers / 5 followings contributes exactly 2.0
        let report = calculate_score(&result_with(vec![(1, 10.0, 5.0)]));
        assert_eq!(report.score, 2.0);
        assert_eq!(report.counted, 1);
        assert_eq!(report.skipped_zero_followings, 0);
    }

    #[test]
    fn test_ratios_are_summed() {
        let report = calculate_score(&result_with(vec![(1, 10.0, 5.0), (2, 9.0, 3.0)]));
        assert_eq!(report.score, 5.0);
        assert_eq!(report.counted, 2);
    }

    #[test]
    fn test_zero_followings_skipped_not_infinite() {
        let report = calculate_score(&result_with(vec![(1, 10.0, 5.0), (2, 100.0, 0.0)]));
        assert_eq!(report.score, 2.0);
        assert!(report.score.is_finite());
        assert_eq!(report.counted, 1);
        assert_eq!(report.skipped_zero_followings, 1);
    }

    #[test]
    fn test_empty_result_scores_zero() {
        let report = calculate_score(&result_with(vec![]));
        assert_eq!(report.score, 0.0);
        assert_eq!(report.counted, 0);
    }

    #[test]
    fn test_deterministic_over_repeated_calls() {
        let data = result_with(vec![(1, 7.0, 3.0), (2, 1.0, 9.0), (3, 250.0, 12.0)]);
        let first = calculate_score(&data);
        let second = calculate_score(&data);
        assert_eq!(first, second);
    }
}
