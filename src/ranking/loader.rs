// Ranking loader: fetches the leaderboard JSON from a URL or a local file.
//
// The hosted copy is tried first and a local copy second. There is no retry:
// each source gets exactly one attempt, and the caller decides what to do
// when every source has failed.

use std::path::Path;

use tracing::{debug, warn};

use super::models::{RankedUser, RankingDocument};
use crate::error::WidgetError;

/// Hosted copy of the ranking (raw GitHub).
pub const DEFAULT_RANKING_URL: &str =
    "https://raw.githubusercontent.com/guezito-dev/Ethos-gigachads/main/data/gigachads-ranking.json";

/// Local fallback, resolved relative to the working directory.
pub const DEFAULT_RANKING_FALLBACK: &str = "./gigachads-ranking.json";

/// Loads the ranked user list from HTTP(S) URLs or filesystem paths.
pub struct RankingLoader {
    client: reqwest::Client,
}

impl RankingLoader {
    pub fn new() -> Result<Self, WidgetError> {
        let client = reqwest::Client::builder()
            .user_agent("vouchboard/0.1 (social-proof widgets)")
            .build()
            .map_err(|e| WidgetError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Load the ranking from a single source.
    ///
    /// Sources starting with `http://` or `https://` are fetched with a GET;
    /// anything else is treated as a path on disk.
    pub async fn load(&self, source: &str) -> Result<Vec<RankedUser>, WidgetError> {
        let body = if is_remote(source) {
            self.fetch_remote(source).await?
        } else {
            read_local(Path::new(source)).await?
        };

        let users = parse_ranking(&body)?;
        debug!(source, users = users.len(), "Ranking loaded");
        Ok(users)
    }

    /// Try each source in order; the first success wins.
    ///
    /// Returns the error of the last source when all of them fail, or
    /// `Precondition` when no source was given at all.
    pub async fn load_first(&self, sources: &[String]) -> Result<Vec<RankedUser>, WidgetError> {
        let mut last_error = None;

        for source in sources {
            match self.load(source).await {
                Ok(users) => return Ok(users),
                Err(e) => {
                    warn!(source = source.as_str(), error = %e, "Ranking source failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| WidgetError::Precondition("No ranking source configured".into())))
    }

    async fn fetch_remote(&self, url: &str) -> Result<String, WidgetError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| WidgetError::Network(format!("GET {url} failed: {e}")))?;

        if !response.status().is_success() {
            return Err(WidgetError::NotFound(format!(
                "GET {url} returned {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| WidgetError::Network(format!("Failed to read body of {url}: {e}")))
    }
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn read_local(path: &Path) -> Result<String, WidgetError> {
    match tokio::fs::read_to_string(path).await {
        Ok(body) => Ok(body),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(WidgetError::NotFound(
            format!("{} does not exist", path.display()),
        )),
        Err(e) => Err(WidgetError::Network(format!(
            "Failed to read {}: {e}",
            path.display()
        ))),
    }
}

/// Parse a ranking document body into the ordered list of users.
///
/// Order is preserved: the first entry is the top-ranked user.
pub fn parse_ranking(body: &str) -> Result<Vec<RankedUser>, WidgetError> {
    let document: RankingDocument = serde_json::from_str(body)?;
    let entries = document
        .ranking
        .ok_or_else(|| WidgetError::MalformedData("`ranking` field is missing".into()))?;

    Ok(entries.into_iter().map(|entry| entry.user).collect())
}
