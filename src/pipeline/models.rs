// Aggregated event type and the display fields derived from it.

use crate::activity::extract::{self, StakeAmount};
use crate::activity::models::ActivityEvent;
use crate::output::format::normalize_millis;
use crate::ranking::models::RankedUser;

/// An activity whose author and subject both resolved to tracked users.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedEvent {
    pub event: ActivityEvent,
    pub author: RankedUser,
    pub subject: RankedUser,
    pub dedup_key: String,
}

impl EnrichedEvent {
    /// Sort key in milliseconds; a missing timestamp sorts as the epoch.
    pub fn sort_millis(&self) -> i64 {
        self.event.timestamp.map(normalize_millis).unwrap_or(0)
    }

    /// Card title: the review comment (or content title/text), else
    /// `Review for {subject}`.
    pub fn title(&self) -> String {
        extract::first_match(&self.event.payload, extract::TITLE_PATHS, extract::as_text)
            .unwrap_or_else(|| format!("Review for {}", self.subject.label()))
    }

    /// Secondary card line. Empty when nothing usable is present.
    pub fn description(&self) -> String {
        let payload = &self.event.payload;
        extract::metadata_description(payload)
            .or_else(|| extract::first_match(payload, extract::DESCRIPTION_PATHS, extract::as_text))
            .unwrap_or_default()
    }

    pub fn stake(&self) -> Option<StakeAmount> {
        extract::stake_amount(&self.event.payload)
    }

    pub fn event_id(&self) -> Option<String> {
        extract::first_match(&self.event.payload, extract::EVENT_ID_PATHS, extract::as_event_id)
    }

    /// `{base_url}/activity/{vouch|review}/{id}`, or `None` when the record
    /// has no id. Every non-vouch type links as a review.
    pub fn link(&self, base_url: &str) -> Option<String> {
        let id = self.event_id()?;
        let kind = if self.event.is_kind("vouch") {
            "vouch"
        } else {
            "review"
        };
        Some(format!(
            "{}/activity/{}/{}",
            base_url.trim_end_matches('/'),
            kind,
            id
        ))
    }

    /// Author avatar: the ranking's `avatarUrl`, else the one on the raw record.
    pub fn author_avatar(&self) -> Option<String> {
        let ranked = self.author.avatar_url.as_deref().filter(|u| !u.trim().is_empty());
        ranked.map(str::to_string).or_else(|| {
            extract::first_match(
                &self.event.payload,
                extract::AUTHOR_AVATAR_PATHS,
                extract::as_text,
            )
        })
    }
}
