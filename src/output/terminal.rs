// Colored terminal output for rankings and aggregated events.
//
// The HTML page is the real deliverable; this is the quick look you get in
// the terminal after a run. main.rs delegates all printing here.

use colored::Colorize;

use super::format::{format_stake, format_time_ago};
use crate::pipeline::models::EnrichedEvent;
use crate::pipeline::widget::WidgetKind;
use crate::ranking::models::RankedUser;

/// Display the loaded ranking, top first.
pub fn display_ranking(users: &[RankedUser]) {
    if users.is_empty() {
        println!("The ranking is empty.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Ranking ({} users) ===", users.len()).bold()
    );
    println!();
    println!(
        "  {:>4}  {:<28} {:<24} {:>10}",
        "Rank".dimmed(),
        "Display name".dimmed(),
        "Username".dimmed(),
        "Profile".dimmed(),
    );
    println!("  {}", "-".repeat(70).dimmed());

    for (i, user) in users.iter().enumerate() {
        println!(
            "  {:>4}. {:<28} @{:<23} {:>10}",
            i + 1,
            super::truncate_chars(user.label(), 26),
            user.username,
            user.profile_id,
        );
    }
    println!();
}

/// Display aggregated events, newest first.
pub fn display_events(kind: WidgetKind, events: &[EnrichedEvent]) {
    if events.is_empty() {
        println!("No recent {} between tracked users.", kind.noun());
        return;
    }

    println!(
        "\n{}",
        format!("=== Recent {} ({}) ===", kind.noun(), events.len()).bold()
    );

    for event in events {
        let when = event
            .event
            .timestamp
            .map(format_time_ago)
            .unwrap_or_else(|| "?".to_string());

        println!(
            "  {} {} {}  {}",
            event.author.label().cyan(),
            "→".dimmed(),
            event.subject.label().cyan(),
            when.dimmed(),
        );

        match kind {
            WidgetKind::Reviews => {
                let title = super::truncate_chars(&event.title(), 100);
                println!("      {}", title);
            }
            WidgetKind::Vouches => {
                let stake = format_stake(event.stake().as_ref());
                println!("      {} ETH", stake.yellow());
            }
        }
    }
    println!();
}

/// Display the failure summary for a cycle that could not load its ranking.
pub fn display_failure(kind: WidgetKind, message: &str) {
    println!(
        "{} Could not build the {} widget: {}",
        "!!".red().bold(),
        kind.noun(),
        message
    );
}
