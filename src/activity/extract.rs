// Field extraction tables for raw activity records.
//
// The activity API is not consistent about where it puts things: the author
// may be under `author` or `authorUser`, the stake under `data.deposited` or
// `content.stakeAmount`, and so on. Every field we read is described here as
// an ordered list of JSON paths. Extraction walks the list and returns the
// first path that yields a usable value.

use serde_json::Value;

/// A path into a JSON object, one key per level.
pub type FieldPath = &'static [&'static str];

pub const EVENT_TYPE_PATHS: &[FieldPath] = &[&["type"]];

pub const AUTHOR_ID_PATHS: &[FieldPath] = &[
    &["author", "profileId"],
    &["authorUser", "profileId"],
    &["authorProfileId"],
];

pub const SUBJECT_ID_PATHS: &[FieldPath] = &[
    &["subject", "profileId"],
    &["subjectUser", "profileId"],
    &["subjectProfileId"],
];

pub const TIMESTAMP_PATHS: &[FieldPath] = &[&["createdAt"], &["timestamp"]];

/// Identifier used to build the activity detail link.
pub const EVENT_ID_PATHS: &[FieldPath] = &[&["data", "id"]];

pub const TITLE_PATHS: &[FieldPath] = &[
    &["data", "comment"],
    &["content", "title"],
    &["content", "text"],
];

/// Description fallbacks, consulted only when `data.metadata` is absent.
pub const DESCRIPTION_PATHS: &[FieldPath] = &[
    &["content", "description"],
    &["translatedDescription"],
    &["description"],
];

pub const AUTHOR_AVATAR_PATHS: &[FieldPath] =
    &[&["author", "avatar"], &["authorUser", "avatarUrl"]];

/// Unit of a stake field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StakeUnit {
    /// Fixed-point integer with 18 decimals.
    Wei,
    /// Already a decimal ETH amount.
    Eth,
}

pub const STAKE_PATHS: &[(FieldPath, StakeUnit)] = &[
    (&["data", "deposited"], StakeUnit::Wei),
    (&["content", "deposited"], StakeUnit::Wei),
    (&["data", "staked"], StakeUnit::Wei),
    (&["content", "stakeAmount"], StakeUnit::Eth),
    (&["content", "staked"], StakeUnit::Wei),
];

/// A raw stake value, not yet formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub enum StakeAmount {
    /// Integer amount in wei, kept as a decimal string so 18-decimal values
    /// don't lose precision.
    Wei(String),
    Eth(f64),
}

/// Follow `path` from `value`, returning the value at the end if every key exists.
pub fn lookup<'a>(value: &'a Value, path: FieldPath) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// Try each path in order, returning the first one `parse` accepts.
pub fn first_match<T>(
    value: &Value,
    paths: &[FieldPath],
    parse: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    paths
        .iter()
        .find_map(|path| lookup(value, *path).and_then(&parse))
}

/// A profile id: positive integer, or a string holding one. Zero counts as absent.
pub fn as_profile_id(value: &Value) -> Option<u64> {
    let id = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    (id != 0).then_some(id)
}

/// A Unix timestamp in whatever unit the record used (seconds or millis).
///
/// Numbers and numeric strings are returned as-is; RFC 3339 strings are
/// converted to milliseconds. Zero counts as absent.
pub fn as_timestamp(value: &Value) -> Option<i64> {
    let ts = match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                chrono::DateTime::parse_from_rfc3339(s)
                    .ok()
                    .map(|dt| dt.timestamp_millis())
            })
        }
        _ => None,
    }?;
    (ts != 0).then_some(ts)
}

/// A non-blank string.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// An event identifier: number or non-blank string, rendered as text.
pub fn as_event_id(value: &Value) -> Option<String> {
    match value {
        Value::Number(n) if n.as_u64() != Some(0) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() && s != "0" => Some(s.trim().to_string()),
        _ => None,
    }
}

/// The `description` field of `data.metadata`.
///
/// `metadata` is normally a JSON-encoded string; an already-decoded object
/// is accepted too. Returns `Some("")` when metadata exists but has no usable
/// description, so callers stop at the metadata step. A blank or null
/// metadata counts as absent.
pub fn metadata_description(value: &Value) -> Option<String> {
    let metadata = lookup(value, &["data", "metadata"])?;
    let description = match metadata {
        Value::String(raw) if raw.trim().is_empty() => return None,
        Value::String(raw) => serde_json::from_str::<Value>(raw)
            .ok()
            .and_then(|parsed| parsed.get("description").and_then(as_text)),
        Value::Object(_) => metadata.get("description").and_then(as_text),
        Value::Null => return None,
        _ => None,
    };
    Some(description.unwrap_or_default())
}

/// The first stake field present, tagged with its unit.
pub fn stake_amount(value: &Value) -> Option<StakeAmount> {
    STAKE_PATHS.iter().find_map(|(path, unit)| {
        let raw = lookup(value, *path)?;
        match (unit, raw) {
            (StakeUnit::Wei, Value::String(s)) if !s.trim().is_empty() => {
                Some(StakeAmount::Wei(s.trim().to_string()))
            }
            (StakeUnit::Wei, Value::Number(n)) => match n.as_u64() {
                Some(0) => None,
                Some(wei) => Some(StakeAmount::Wei(wei.to_string())),
                None => n.as_f64().map(|wei| StakeAmount::Eth(wei / 1e18)),
            },
            (StakeUnit::Eth, Value::String(s)) => {
                s.trim().parse::<f64>().ok().map(StakeAmount::Eth)
            }
            (StakeUnit::Eth, Value::Number(n)) => {
                n.as_f64().filter(|eth| *eth != 0.0).map(StakeAmount::Eth)
            }
            _ => None,
        }
    })
}
