// Display formatting shared by every renderer: relative time and stake amounts.

use crate::activity::extract::StakeAmount;

/// Timestamps below this are taken to be seconds, not milliseconds.
pub const MILLIS_THRESHOLD: i64 = 1_000_000_000_000;

const WEI_PER_MILLI_ETH: u128 = 1_000_000_000_000_000;

/// Normalize a Unix timestamp of unknown unit to milliseconds.
///
/// The activity API mixes seconds and milliseconds. Any value below 10^12
/// (which as milliseconds would be before September 2001) is treated as
/// seconds and scaled up.
pub fn normalize_millis(timestamp: i64) -> i64 {
    if timestamp < MILLIS_THRESHOLD {
        timestamp.saturating_mul(1000)
    } else {
        timestamp
    }
}

/// Format `timestamp` relative to `now_millis` as `"Ns ago"`, `"Nm ago"`,
/// `"Nh ago"`, `"Nd ago"` or `"Nmo ago"` (30-day months).
///
/// Timestamps in the future clamp to `"0s ago"`.
pub fn format_time_ago_at(timestamp: i64, now_millis: i64) -> String {
    let then = normalize_millis(timestamp);
    let diff = (now_millis.saturating_sub(then) / 1000).max(0);

    match diff {
        d if d < 60 => format!("{d}s ago"),
        d if d < 3_600 => format!("{}m ago", d / 60),
        d if d < 86_400 => format!("{}h ago", d / 3_600),
        d if d < 2_592_000 => format!("{}d ago", d / 86_400),
        d => format!("{}mo ago", d / 2_592_000),
    }
}

/// [`format_time_ago_at`] against the current wall clock.
pub fn format_time_ago(timestamp: i64) -> String {
    format_time_ago_at(timestamp, chrono::Utc::now().timestamp_millis())
}

/// Convert a wei amount (decimal integer string) to ETH with three decimals.
///
/// Rounds half up at the third decimal. Blank or unparseable input reads as zero.
pub fn wei_to_eth(wei: &str) -> String {
    let wei: u128 = wei.trim().parse().unwrap_or(0);
    let milli = wei
        .checked_add(WEI_PER_MILLI_ETH / 2)
        .map(|w| w / WEI_PER_MILLI_ETH)
        .unwrap_or(wei / WEI_PER_MILLI_ETH);
    format!("{}.{:03}", milli / 1000, milli % 1000)
}

/// Display string for a stake, `"0.000"` when none was found.
pub fn format_stake(stake: Option<&StakeAmount>) -> String {
    match stake {
        Some(StakeAmount::Wei(wei)) => wei_to_eth(wei),
        Some(StakeAmount::Eth(eth)) if eth.is_finite() => format!("{eth:.3}"),
        _ => "0.000".to_string(),
    }
}

/// Shortest scroll period for the marquee, in seconds.
pub const MARQUEE_MIN_DURATION_SECS: f64 = 39.0;

/// Pixels per second the marquee strip moves at.
pub const MARQUEE_SPEED_PX_PER_SEC: f64 = 40.0;

/// Scroll period for a marquee strip of `content_width_px`, floored at
/// [`MARQUEE_MIN_DURATION_SECS`].
pub fn marquee_duration_secs(content_width_px: f64) -> f64 {
    (content_width_px / MARQUEE_SPEED_PX_PER_SEC).max(MARQUEE_MIN_DURATION_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wei_rounds_half_up() {
        assert_eq!(wei_to_eth("1499999999999999"), "0.001");
        assert_eq!(wei_to_eth("1500000000000000"), "0.002");
        assert_eq!(wei_to_eth("  "), "0.000");
    }

    #[test]
    fn huge_wei_does_not_overflow() {
        let max = u128::MAX.to_string();
        assert!(wei_to_eth(&max).ends_with(".374"));
    }
}
