// Activity fetcher trait: the seam between the aggregator and the network.
//
// The aggregator only needs "give me this user's recent activities". The HTTP
// client implements it for real runs; tests plug in a canned fetcher.

use async_trait::async_trait;

use super::models::{ActivityEvent, UserKey};

/// Fetch the recent activities of one user.
///
/// Implementations must not fail: a transport or parse problem is logged
/// and reported as an empty list, so one bad user never aborts a run.
/// Only the first page is returned.
#[async_trait]
pub trait ActivityFetcher: Send + Sync {
    async fn fetch_activities(&self, userkey: &UserKey) -> Vec<ActivityEvent>;
}
