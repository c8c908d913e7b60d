// Field extraction tables: priority order and fallbacks for every field we read.

use serde_json::json;

use vouchboard::activity::extract::{self, StakeAmount};
use vouchboard::activity::models::{ActivityEvent, ActivityPage, UserKey};
use vouchboard::pipeline::models::EnrichedEvent;
use vouchboard::ranking::models::RankedUser;

fn user(id: u64, username: &str, display_name: &str) -> RankedUser {
    RankedUser {
        profile_id: id,
        username: username.to_string(),
        display_name: display_name.to_string(),
        avatar_url: None,
    }
}

fn enriched(payload: serde_json::Value) -> EnrichedEvent {
    let event = ActivityEvent::from_raw(payload);
    let dedup_key = event.dedup_key();
    EnrichedEvent {
        event,
        author: user(1, "alice", "Alice"),
        subject: user(2, "bob", "Bob"),
        dedup_key,
    }
}

#[test]
fn userkey_format() {
    assert_eq!(UserKey::profile_id(1234).to_string(), "profileId:1234");
}

#[test]
fn author_field_wins_over_author_user() {
    let event = ActivityEvent::from_raw(json!({
        "type": "review",
        "author": {"profileId": 5},
        "authorUser": {"profileId": 6},
        "subject": {"profileId": 7},
        "createdAt": 100
    }));
    assert_eq!(event.author_profile_id, Some(5));
    assert_eq!(event.subject_profile_id, Some(7));
}

#[test]
fn author_user_used_when_author_has_no_id() {
    let event = ActivityEvent::from_raw(json!({
        "type": "review",
        "author": {"name": "someone"},
        "authorUser": {"profileId": 6},
        "subjectProfileId": 8
    }));
    assert_eq!(event.author_profile_id, Some(6));
    assert_eq!(event.subject_profile_id, Some(8));
}

#[test]
fn created_at_wins_over_timestamp() {
    let event = ActivityEvent::from_raw(json!({"createdAt": 200, "timestamp": 100}));
    assert_eq!(event.timestamp, Some(200));

    let event = ActivityEvent::from_raw(json!({"timestamp": "1700000000"}));
    assert_eq!(event.timestamp, Some(1_700_000_000));
}

#[test]
fn dedup_key_with_missing_parts_is_still_deterministic() {
    let event = ActivityEvent::from_raw(json!({"type": "vouch", "author": {"profileId": 1}}));
    assert_eq!(event.dedup_key(), "vouch-1--");
}

#[test]
fn dedup_key_ignores_type_casing() {
    let upper = ActivityEvent::from_raw(json!({
        "type": "VOUCH", "author": {"profileId": 1}, "subject": {"profileId": 2}, "createdAt": 5
    }));
    let lower = ActivityEvent::from_raw(json!({
        "type": "vouch", "author": {"profileId": 1}, "subject": {"profileId": 2}, "createdAt": 5
    }));
    assert_eq!(upper.dedup_key(), "vouch-1-2-5");
    assert_eq!(upper.dedup_key(), lower.dedup_key());
}

#[test]
fn deserialize_page_with_null_total() {
    let json = r#"{"values": [{"type": "vouch"}], "total": null}"#;
    let page: ActivityPage = serde_json::from_str(json).unwrap();
    assert!(page.total.is_none());
    assert_eq!(page.len(), 1);
}

#[test]
fn deserialize_page_with_null_or_missing_values() {
    let page: ActivityPage = serde_json::from_str(r#"{"values": null, "total": 3}"#).unwrap();
    assert_eq!(page.total, Some(3));
    assert!(page.into_values().is_empty());

    let page: ActivityPage = serde_json::from_str("{}").unwrap();
    assert!(page.is_empty());
    assert!(page.total.is_none());
}

#[test]
fn stake_prefers_data_deposited() {
    let payload = json!({
        "data": {"deposited": "2000000000000000000", "staked": "1"},
        "content": {"stakeAmount": "9.5"}
    });
    assert_eq!(
        extract::stake_amount(&payload),
        Some(StakeAmount::Wei("2000000000000000000".to_string()))
    );
}

#[test]
fn stake_amount_in_eth_is_taken_as_is() {
    let payload = json!({"content": {"stakeAmount": "0.25", "staked": "1000000000000000000"}});
    assert_eq!(extract::stake_amount(&payload), Some(StakeAmount::Eth(0.25)));
}

#[test]
fn stake_falls_through_to_content_staked() {
    let payload = json!({"content": {"staked": 500000000000000000u64}});
    assert_eq!(
        extract::stake_amount(&payload),
        Some(StakeAmount::Wei("500000000000000000".to_string()))
    );
    assert_eq!(extract::stake_amount(&json!({})), None);
}

#[test]
fn zero_eth_stake_falls_through() {
    let payload = json!({"content": {"stakeAmount": 0, "staked": "3000000000000000000"}});
    assert_eq!(
        extract::stake_amount(&payload),
        Some(StakeAmount::Wei("3000000000000000000".to_string()))
    );
}

#[test]
fn title_uses_comment_first() {
    let event = enriched(json!({
        "data": {"comment": "Great builder"},
        "content": {"title": "ignored"}
    }));
    assert_eq!(event.title(), "Great builder");
}

#[test]
fn title_skips_blank_comment() {
    let event = enriched(json!({
        "data": {"comment": "   "},
        "content": {"text": "From content text"}
    }));
    assert_eq!(event.title(), "From content text");
}

#[test]
fn title_falls_back_to_subject_name() {
    let event = enriched(json!({"type": "review"}));
    assert_eq!(event.title(), "Review for Bob");
}

#[test]
fn description_parses_metadata_json_string() {
    let event = enriched(json!({
        "data": {"metadata": "{\"description\": \"Shipped three audits with me\"}"},
        "description": "not this one"
    }));
    assert_eq!(event.description(), "Shipped three audits with me");
}

#[test]
fn unparseable_metadata_yields_empty_description() {
    let event = enriched(json!({
        "data": {"metadata": "{not json"},
        "description": "not this one"
    }));
    assert_eq!(event.description(), "");
}

#[test]
fn blank_metadata_falls_through_to_content_description() {
    let event = enriched(json!({
        "data": {"metadata": ""},
        "content": {"description": "Reliable counterparty"}
    }));
    assert_eq!(event.description(), "Reliable counterparty");
}

#[test]
fn description_without_metadata_uses_fallbacks() {
    let event = enriched(json!({"translatedDescription": "Traduit"}));
    assert_eq!(event.description(), "Traduit");

    let event = enriched(json!({}));
    assert_eq!(event.description(), "");
}

#[test]
fn link_built_from_data_id() {
    let event = enriched(json!({"type": "Review", "data": {"id": 812}}));
    assert_eq!(
        event.link("https://app.ethos.network/").as_deref(),
        Some("https://app.ethos.network/activity/review/812")
    );
}

#[test]
fn vouch_links_use_vouch_segment() {
    let event = enriched(json!({"type": "VOUCH", "data": {"id": 44}}));
    assert_eq!(
        event.link("https://app.ethos.network").as_deref(),
        Some("https://app.ethos.network/activity/vouch/44")
    );
}

#[test]
fn other_types_link_as_reviews() {
    let event = enriched(json!({"type": "attestation", "data": {"id": 7}}));
    assert_eq!(
        event.link("https://app.ethos.network").as_deref(),
        Some("https://app.ethos.network/activity/review/7")
    );
}

#[test]
fn no_link_without_id() {
    let event = enriched(json!({"type": "vouch", "data": {"id": 0}}));
    assert!(event.link("https://app.ethos.network").is_none());
}

#[test]
fn author_avatar_falls_back_to_raw_record() {
    let event = enriched(json!({"author": {"avatar": "https://img.example/raw.png"}}));
    assert_eq!(
        event.author_avatar().as_deref(),
        Some("https://img.example/raw.png")
    );
}
