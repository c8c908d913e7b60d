// Activity aggregation: poll -> extract -> dedup -> resolve -> filter -> sort.
//
// Polls the top of the ranking one user at a time, with a fixed pause between
// calls to go easy on the external API. Every returned activity is keyed by
// (type, author, subject, timestamp); the first occurrence wins and later
// copies are dropped. Only events where both parties are tracked users
// survive. The result is sorted newest first and capped.
//
// Polling is strictly sequential, so the seen-set needs no locking.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::models::EnrichedEvent;
use crate::activity::models::UserKey;
use crate::activity::traits::ActivityFetcher;
use crate::error::WidgetError;
use crate::ranking::models::RankedUser;

/// Knobs for one aggregation run.
#[derive(Debug, Clone)]
pub struct AggregateConfig {
    /// Keep only events of this type (ASCII case-insensitive). `None` keeps all.
    pub event_kind: Option<String>,
    /// Maximum number of events returned.
    pub max_items: usize,
    /// How many users from the top of the ranking to poll.
    pub poll_breadth: usize,
    /// Pause between consecutive fetches.
    pub poll_delay: Duration,
    /// Drop events where author and subject are the same profile.
    pub exclude_self: bool,
    /// Draw a progress bar on stderr while polling.
    pub show_progress: bool,
}

impl Default for AggregateConfig {
    fn default() -> Self {
        Self {
            event_kind: None,
            max_items: 5,
            poll_breadth: 10,
            poll_delay: Duration::from_millis(300),
            exclude_self: false,
            show_progress: false,
        }
    }
}

/// Why an event didn't make it into the output. Tallied for the debug log.
#[derive(Debug, Default)]
struct SkipCounts {
    wrong_kind: usize,
    missing_ids: usize,
    duplicate: usize,
    untracked: usize,
    self_event: usize,
}

/// Aggregate recent activity between tracked users.
///
/// Fails with `Precondition` only when `ranking` is `None`. Per-user fetch
/// problems are absorbed by the fetcher, so a run where every fetch fails
/// yields an empty list.
pub async fn aggregate(
    ranking: Option<&[RankedUser]>,
    fetcher: &dyn ActivityFetcher,
    config: &AggregateConfig,
) -> Result<Vec<EnrichedEvent>, WidgetError> {
    let ranking = ranking
        .ok_or_else(|| WidgetError::Precondition("Ranking data not available".into()))?;

    let by_id: HashMap<u64, &RankedUser> = ranking.iter().map(|u| (u.profile_id, u)).collect();
    debug!(tracked = by_id.len(), "Tracked users indexed");

    let to_poll = &ranking[..ranking.len().min(config.poll_breadth)];
    let pb = progress_bar(to_poll.len(), config.show_progress);

    let mut seen: HashSet<String> = HashSet::new();
    let mut skipped = SkipCounts::default();
    let mut output = Vec::new();

    for (i, user) in to_poll.iter().enumerate() {
        if i > 0 && !config.poll_delay.is_zero() {
            tokio::time::sleep(config.poll_delay).await;
        }

        let events = fetcher
            .fetch_activities(&UserKey::profile_id(user.profile_id))
            .await;
        debug!(
            username = user.username.as_str(),
            count = events.len(),
            "Processing activities"
        );

        for event in events {
            if let Some(kind) = &config.event_kind {
                if !event.is_kind(kind) {
                    skipped.wrong_kind += 1;
                    continue;
                }
            }

            let (Some(author_id), Some(subject_id)) =
                (event.author_profile_id, event.subject_profile_id)
            else {
                skipped.missing_ids += 1;
                continue;
            };

            let key = event.dedup_key();
            if !seen.insert(key.clone()) {
                skipped.duplicate += 1;
                continue;
            }

            let (Some(author), Some(subject)) = (by_id.get(&author_id), by_id.get(&subject_id))
            else {
                skipped.untracked += 1;
                continue;
            };

            if config.exclude_self && author_id == subject_id {
                skipped.self_event += 1;
                continue;
            }

            debug!(
                author = author.username.as_str(),
                subject = subject.username.as_str(),
                kind = event.event_type.as_str(),
                "Unique event"
            );
            output.push(EnrichedEvent {
                event,
                author: (*author).clone(),
                subject: (*subject).clone(),
                dedup_key: key,
            });
        }

        pb.inc(1);
    }
    pb.finish_and_clear();

    debug!(
        wrong_kind = skipped.wrong_kind,
        missing_ids = skipped.missing_ids,
        duplicate = skipped.duplicate,
        untracked = skipped.untracked,
        self_event = skipped.self_event,
        "Skipped events"
    );
    info!(
        polled = to_poll.len(),
        unique = output.len(),
        "Aggregation complete"
    );

    // Stable sort: equal timestamps keep polling order.
    output.sort_by_key(|e| std::cmp::Reverse(e.sort_millis()));
    output.truncate(config.max_items);
    Ok(output)
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("  Polling [{bar:30}] {pos}/{len} ({eta})")
    {
        pb.set_style(style);
    }
    pb
}
