// Widget presets. Each widget is the same aggregator with different knobs.

use std::time::Duration;

use clap::ValueEnum;

use super::aggregate::AggregateConfig;

/// Which social-proof widget to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetKind {
    /// Latest reviews between tracked users, shown as cards.
    Reviews,
    /// Latest vouches between tracked users, shown as a scrolling strip.
    Vouches,
}

/// How the aggregated events are presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresentationMode {
    /// One card per event.
    List,
    /// A single horizontally scrolling strip.
    Marquee,
}

impl WidgetKind {
    /// Default aggregation settings for this widget.
    pub fn aggregate_config(self) -> AggregateConfig {
        match self {
            WidgetKind::Reviews => AggregateConfig {
                event_kind: None,
                max_items: 5,
                poll_breadth: 10,
                poll_delay: Duration::from_millis(300),
                exclude_self: false,
                show_progress: false,
            },
            WidgetKind::Vouches => AggregateConfig {
                event_kind: Some("vouch".to_string()),
                max_items: 8,
                poll_breadth: 20,
                poll_delay: Duration::from_millis(200),
                exclude_self: true,
                show_progress: false,
            },
        }
    }

    pub fn default_mode(self) -> PresentationMode {
        match self {
            WidgetKind::Reviews => PresentationMode::List,
            WidgetKind::Vouches => PresentationMode::Marquee,
        }
    }

    /// Plural noun used in headings and placeholders.
    pub fn noun(self) -> &'static str {
        match self {
            WidgetKind::Reviews => "reviews",
            WidgetKind::Vouches => "vouches",
        }
    }

    /// Verb used in card headings ("alice reviewed bob").
    pub fn verb(self) -> &'static str {
        match self {
            WidgetKind::Reviews => "reviewed",
            WidgetKind::Vouches => "vouched for",
        }
    }
}

/// Everything needed to run and render one widget.
#[derive(Debug, Clone)]
pub struct WidgetSettings {
    pub kind: WidgetKind,
    pub aggregate: AggregateConfig,
    pub mode: PresentationMode,
    /// Base URL for event detail links.
    pub app_url: String,
}

impl WidgetSettings {
    /// Preset settings for `kind`.
    pub fn preset(kind: WidgetKind, app_url: &str) -> Self {
        Self {
            kind,
            aggregate: kind.aggregate_config(),
            mode: kind.default_mode(),
            app_url: app_url.to_string(),
        }
    }
}
