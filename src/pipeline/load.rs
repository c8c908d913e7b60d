// One widget load cycle: ranking -> aggregate -> render.
//
// All state (ranking snapshot, dedup set) lives for the duration of a single
// call; nothing carries over between cycles.

use tracing::{error, info};

use super::aggregate::aggregate;
use super::models::EnrichedEvent;
use super::widget::WidgetSettings;
use crate::activity::traits::ActivityFetcher;
use crate::error::WidgetError;
use crate::output::html::{self, GENERIC_ERROR_MESSAGE};
use crate::ranking::loader::RankingLoader;
use crate::ranking::models::RankedUser;

/// Result of a load cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    /// The ranking loaded; `events` may still be empty.
    Loaded {
        ranking: Vec<RankedUser>,
        events: Vec<EnrichedEvent>,
    },
    /// The cycle stopped early. The error is for logs, not for the page.
    Failed(WidgetError),
}

impl CycleOutcome {
    /// Render the outcome as a complete HTML page.
    pub fn to_page(&self, settings: &WidgetSettings, now_millis: i64) -> String {
        match self {
            CycleOutcome::Loaded { events, .. } => {
                html::render_page(settings, Ok(html::render(events, settings, now_millis)))
            }
            CycleOutcome::Failed(_) => html::render_page(settings, Err(GENERIC_ERROR_MESSAGE)),
        }
    }
}

/// Run one load cycle.
///
/// Ranking sources are tried in order. If none loads, the cycle fails;
/// otherwise aggregation always produces a (possibly empty) event list.
pub async fn run_cycle(
    loader: &RankingLoader,
    ranking_sources: &[String],
    fetcher: &dyn ActivityFetcher,
    settings: &WidgetSettings,
) -> CycleOutcome {
    let ranking = match loader.load_first(ranking_sources).await {
        Ok(users) => users,
        Err(e) => {
            error!(error = %e, "All ranking sources failed");
            return CycleOutcome::Failed(e);
        }
    };

    info!(
        widget = settings.kind.noun(),
        tracked = ranking.len(),
        "Ranking loaded, aggregating"
    );

    match aggregate(Some(ranking.as_slice()), fetcher, &settings.aggregate).await {
        Ok(events) => CycleOutcome::Loaded { ranking, events },
        Err(e) => {
            error!(error = %e, "Aggregation failed");
            CycleOutcome::Failed(e)
        }
    }
}
