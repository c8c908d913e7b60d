// Serde types for the ranking JSON document.

use serde::{Deserialize, Serialize};

/// A user from the leaderboard. Identity key is `profile_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedUser {
    pub profile_id: u64,
    pub username: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl RankedUser {
    /// Name to show in cards: display name, or the username when it's blank.
    pub fn label(&self) -> &str {
        if self.display_name.trim().is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }
}

/// One leaderboard row. The document carries more fields per row (score,
/// rank, stats) but only the embedded user matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingEntry {
    pub user: RankedUser,
}

/// The whole ranking document: `{ "ranking": [{ "user": {...} }, ...] }`.
///
/// `ranking` is optional at the serde level so a missing field can be
/// reported as malformed data rather than a generic parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingDocument {
    pub ranking: Option<Vec<RankingEntry>>,
}
