// HTTP client for the Ethos activity API.
//
// One POST per user to `activities/profile/all`. The response is a page of
// raw activity records; we normalize each into an ActivityEvent. Failures are
// logged at warn level and turned into an empty page.

use async_trait::async_trait;
use tracing::{debug, warn};

use super::models::{ActivityEvent, ActivityPage, ActivityRequest, UserKey};
use super::traits::ActivityFetcher;
use crate::error::WidgetError;

/// Default endpoint for per-profile activity listings.
pub const DEFAULT_ACTIVITY_API_URL: &str =
    "https://api.ethos.network/api/v2/activities/profile/all";

/// Provider page size. Only the first page is ever requested.
pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Client for the activity listing endpoint.
pub struct EthosActivityClient {
    client: reqwest::Client,
    endpoint: String,
    page_size: u32,
}

impl EthosActivityClient {
    pub fn new(endpoint: &str, page_size: u32) -> Result<Self, WidgetError> {
        let client = reqwest::Client::builder()
            .user_agent("vouchboard/0.1 (social-proof widgets)")
            .build()
            .map_err(|e| WidgetError::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            page_size,
        })
    }

    /// Fetch the first page of activities for `userkey`, surfacing errors.
    pub async fn fetch_page(&self, userkey: &UserKey) -> Result<ActivityPage, WidgetError> {
        let request = ActivityRequest {
            userkey: userkey.as_str(),
            exclude_historical: false,
            limit: self.page_size,
            offset: 0,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| WidgetError::Network(format!("Activity request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(WidgetError::NotFound(format!(
                "Activity API returned {} for {userkey}",
                response.status()
            )));
        }

        let page: ActivityPage = response.json().await?;
        Ok(page)
    }
}

#[async_trait]
impl ActivityFetcher for EthosActivityClient {
    async fn fetch_activities(&self, userkey: &UserKey) -> Vec<ActivityEvent> {
        debug!(userkey = userkey.as_str(), "Fetching activities");

        match self.fetch_page(userkey).await {
            Ok(page) => {
                debug!(
                    userkey = userkey.as_str(),
                    returned = page.len(),
                    total = page.total.unwrap_or(0),
                    "Activities fetched"
                );
                page.into_values().into_iter().map(ActivityEvent::from_raw).collect()
            }
            Err(e) => {
                warn!(
                    userkey = userkey.as_str(),
                    error = %e,
                    "Activity fetch failed, treating as empty"
                );
                Vec::new()
            }
        }
    }
}
