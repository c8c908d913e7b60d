// HTML rendering for the widgets: review cards and the vouch marquee.
//
// Rendering is pure: the caller passes the current time in, nothing here
// touches the network or the clock. Output is a complete standalone page
// with the loading / error / content mount points the widget pages use.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::format::{
    format_stake, format_time_ago_at, MARQUEE_MIN_DURATION_SECS, MARQUEE_SPEED_PX_PER_SEC,
};
use crate::pipeline::models::EnrichedEvent;
use crate::pipeline::widget::{PresentationMode, WidgetKind, WidgetSettings};
use crate::ranking::models::RankedUser;

/// Generic message shown when nothing could be loaded.
pub const GENERIC_ERROR_MESSAGE: &str = "Unable to load data. Please try again later.";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; background: #111318; color: #e8e8e8; margin: 0; padding: 1rem; }
.error { color: #ff6b6b; text-align: center; padding: 1rem; }
.empty { text-align: center; color: #a0a0a0; }
.card { display: block; background: #1b1e26; border-radius: 12px; padding: 1rem; margin-bottom: 0.75rem;
        color: inherit; text-decoration: none; opacity: 0; animation: card-in 0.4s ease forwards; }
a.card { cursor: pointer; }
a.card:hover { background: #232733; }
.review-header { display: flex; align-items: center; gap: 0.5rem; }
.review-header h3 { margin: 0; font-size: 1rem; }
.avatar, .vouch-avatar { width: 28px; height: 28px; border-radius: 50%; object-fit: cover; }
.time-ago { color: #8a8f9c; font-size: 0.85rem; margin: 0.25rem 0; }
.review-description { color: #b8bcc6; margin: 0.25rem 0 0; }
@keyframes card-in { from { opacity: 0; transform: translateY(6px); } to { opacity: 1; transform: none; } }

.marquee { overflow: hidden; white-space: nowrap; outline: none; }
.marquee-track { display: inline-flex; animation: marquee-scroll 39s linear infinite; }
.marquee:hover .marquee-track, .marquee:focus-within .marquee-track { animation-play-state: paused; }
.marquee-content { display: inline-flex; align-items: center; gap: 0.5rem; padding-right: 2rem; }
.vouch-arrow { font-weight: 900; font-size: 1.05em; color: #41c9fa; }
.vouch-amount { color: #41c9fa; font-weight: 600; }
.vouch-date { color: #8a8f9c; font-size: 0.85em; }
.vouch-separator { opacity: 0.4; margin: 0 0.75rem; }
@keyframes marquee-scroll { from { transform: translateX(0); } to { transform: translateX(-50%); } }
"#;

/// Render the events in the widget's configured presentation mode.
pub fn render(events: &[EnrichedEvent], settings: &WidgetSettings, now_millis: i64) -> Markup {
    match settings.mode {
        PresentationMode::List => render_list(events, settings.kind, &settings.app_url, now_millis),
        PresentationMode::Marquee => render_marquee(events, settings.kind, now_millis),
    }
}

/// One card per event. Cards with an event id link to the activity page.
pub fn render_list(
    events: &[EnrichedEvent],
    kind: WidgetKind,
    app_url: &str,
    now_millis: i64,
) -> Markup {
    let container_id = format!("{}-container", kind.noun());

    html! {
        div id=(container_id) {
            @if events.is_empty() {
                p .empty { (empty_message(kind)) }
            }
            @for (index, event) in events.iter().enumerate() {
                (render_card(event, index, kind, app_url, now_millis))
            }
        }
    }
}

fn render_card(
    event: &EnrichedEvent,
    index: usize,
    kind: WidgetKind,
    app_url: &str,
    now_millis: i64,
) -> Markup {
    let delay = format!("animation-delay: {:.1}s", index as f64 * 0.1);
    let heading = format!(
        "{} {} {}",
        event.author.label(),
        kind.verb(),
        event.subject.label()
    );
    let description = event.description();

    let body = html! {
        div .review-header {
            @if let Some(avatar) = event.author_avatar() {
                img .avatar src=(avatar) alt=(event.author.label()) loading="lazy";
            }
            h3 { (heading) }
        }
        @if let Some(ts) = event.event.timestamp {
            p .time-ago { (format_time_ago_at(ts, now_millis)) }
        }
        p .review-title { strong { (event.title()) } }
        @if !description.is_empty() {
            p .review-description { (description) }
        }
    };

    html! {
        @if let Some(link) = event.link(app_url) {
            a .card href=(link) target="_blank" rel="noopener noreferrer" style=(delay) { (body) }
        } @else {
            div .card style=(delay) { (body) }
        }
    }
}

/// A horizontally scrolling strip of `author -> subject  stake  time` entries.
///
/// The entries are emitted twice back to back so that scrolling the track
/// by half its width loops seamlessly. An inline script sets the scroll
/// period from the measured width of one copy. Hover or keyboard focus
/// pauses the animation.
pub fn render_marquee(events: &[EnrichedEvent], kind: WidgetKind, now_millis: i64) -> Markup {
    let container_id = format!("{}-marquee", kind.noun());

    if events.is_empty() {
        return html! {
            div .marquee id=(container_id) {
                span .empty { (empty_message(kind)) }
            }
        };
    }

    let strip = html! {
        @for (index, event) in events.iter().enumerate() {
            @if index > 0 {
                span .vouch-separator { "|" }
            }
            (render_marquee_entry(event, now_millis))
        }
    };

    html! {
        div .marquee id=(container_id) tabindex="0" {
            div .marquee-track style=(format!("animation-duration: {MARQUEE_MIN_DURATION_SECS}s")) {
                span .marquee-content { (strip) }
                span .marquee-content aria-hidden="true" { (strip) }
            }
        }
        script { (PreEscaped(marquee_script(&container_id))) }
    }
}

fn render_marquee_entry(event: &EnrichedEvent, now_millis: i64) -> Markup {
    let stake = format_stake(event.stake().as_ref());

    html! {
        img .vouch-avatar src=(avatar_or_generated(&event.author)) loading="lazy" draggable="false" alt="";
        span .vouch-author { (event.author.label()) }
        span .vouch-arrow { "→" }
        img .vouch-avatar src=(avatar_or_generated(&event.subject)) loading="lazy" draggable="false" alt="";
        span .vouch-author { (event.subject.label()) }
        span .vouch-amount { (stake) " ETH" }
        @if let Some(ts) = event.event.timestamp {
            span .vouch-date { (format_time_ago_at(ts, now_millis)) }
        }
    }
}

/// The user's avatar, or a generated one seeded by username.
pub fn avatar_or_generated(user: &RankedUser) -> String {
    match user.avatar_url.as_deref() {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => format!(
            "https://api.dicebear.com/7.x/adventurer/svg?radius=50&seed={}",
            utf8_percent_encode(&user.username, NON_ALPHANUMERIC)
        ),
    }
}

fn marquee_script(container_id: &str) -> String {
    format!(
        r#"(function () {{
  var root = document.getElementById("{container_id}");
  if (!root) return;
  var track = root.querySelector(".marquee-track");
  var first = root.querySelector(".marquee-content");
  if (!track || !first) return;
  var secs = Math.max({MARQUEE_MIN_DURATION_SECS}, first.scrollWidth / {MARQUEE_SPEED_PX_PER_SEC});
  track.style.animationDuration = secs + "s";
}})();"#
    )
}

fn empty_message(kind: WidgetKind) -> String {
    format!("No recent {} between tracked users", kind.noun())
}

/// Wrap widget markup in a full page.
///
/// `body` is the rendered widget, or the user-visible error message when the
/// cycle failed. The loading indicator is always rendered hidden since the
/// page is produced after loading finished.
pub fn render_page(settings: &WidgetSettings, body: Result<Markup, &str>) -> String {
    let title = format!("Recent {}", settings.kind.noun());
    let (error, content) = match body {
        Ok(markup) => (None, Some(markup)),
        Err(message) => (Some(message), None),
    };

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div #loading style="display: none" { "Loading..." }
                div #error style=(if error.is_some() { "display: block" } else { "display: none" }) {
                    @if let Some(message) = error {
                        div .error { (message) }
                    }
                }
                div #content style="display: block" {
                    @if let Some(markup) = content {
                        (markup)
                    }
                }
            }
        }
    }
    .into_string()
}
