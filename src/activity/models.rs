// Activity types: request/response bodies and the normalized event.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::extract;

/// Namespaced user identifier understood by the activity API.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UserKey(String);

impl UserKey {
    /// `profileId:<id>`
    pub fn profile_id(id: u64) -> Self {
        Self(format!("profileId:{id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /api/v2/activities/profile/all`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRequest<'a> {
    pub userkey: &'a str,
    pub exclude_historical: bool,
    pub limit: u32,
    pub offset: u32,
}

/// One page of activities. Both fields may be missing or `null`.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityPage {
    #[serde(default)]
    values: Option<Vec<Value>>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl ActivityPage {
    /// The raw records, empty when the provider sent none.
    pub fn into_values(self) -> Vec<Value> {
        self.values.unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.values.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single activity with its key fields pulled out of the raw record.
///
/// Ids and timestamp are optional because the upstream record may not carry
/// them in any of the known places; the aggregator drops such events.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEvent {
    pub event_type: String,
    pub author_profile_id: Option<u64>,
    pub subject_profile_id: Option<u64>,
    /// Seconds or milliseconds, exactly as received. See `output::format::normalize_millis`.
    pub timestamp: Option<i64>,
    /// The raw record, for comment/stake/metadata lookups at render time.
    pub payload: Value,
}

impl ActivityEvent {
    /// Build an event from a raw API record using the extraction tables.
    pub fn from_raw(payload: Value) -> Self {
        let event_type =
            extract::first_match(&payload, extract::EVENT_TYPE_PATHS, extract::as_text)
                .unwrap_or_default();
        let author_profile_id =
            extract::first_match(&payload, extract::AUTHOR_ID_PATHS, extract::as_profile_id);
        let subject_profile_id =
            extract::first_match(&payload, extract::SUBJECT_ID_PATHS, extract::as_profile_id);
        let timestamp =
            extract::first_match(&payload, extract::TIMESTAMP_PATHS, extract::as_timestamp);

        Self {
            event_type,
            author_profile_id,
            subject_profile_id,
            timestamp,
            payload,
        }
    }

    /// Composite key `type-author-subject-timestamp` used for deduplication.
    ///
    /// The type is lowercased to match `is_kind`. Missing parts render as
    /// empty strings so the key stays deterministic.
    pub fn dedup_key(&self) -> String {
        fn part<T: ToString>(v: Option<T>) -> String {
            v.map(|v| v.to_string()).unwrap_or_default()
        }
        format!(
            "{}-{}-{}-{}",
            self.event_type.to_ascii_lowercase(),
            part(self.author_profile_id),
            part(self.subject_profile_id),
            part(self.timestamp),
        )
    }

    /// Whether the event type equals `kind`, ignoring ASCII case.
    pub fn is_kind(&self, kind: &str) -> bool {
        self.event_type.eq_ignore_ascii_case(kind)
    }
}
