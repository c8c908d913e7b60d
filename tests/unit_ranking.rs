// Ranking parsing and local-file loading. No network access.

use std::path::PathBuf;

use vouchboard::error::WidgetError;
use vouchboard::ranking::loader::{parse_ranking, RankingLoader};

const RANKING_JSON: &str = r#"{
    "generatedAt": "2026-10-01T00:00:00Z",
    "ranking": [
        {"rank": 1, "score": 2400, "user": {"profileId": 11, "username": "alice", "displayName": "Alice", "avatarUrl": "https://img.example/a.png"}},
        {"rank": 2, "score": 2100, "user": {"profileId": 22, "username": "bob", "displayName": "Bob"}},
        {"rank": 3, "score": 1900, "user": {"profileId": 33, "username": "carol", "displayName": ""}}
    ]
}"#;

/// A unique scratch path under the system temp dir.
fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "vouchboard-test-{}-{}-{name}",
        std::process::id(),
        chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
    ))
}

#[test]
fn parse_keeps_rank_order_and_fields() {
    let users = parse_ranking(RANKING_JSON).unwrap();
    assert_eq!(users.len(), 3);
    assert_eq!(users[0].profile_id, 11);
    assert_eq!(users[0].avatar_url.as_deref(), Some("https://img.example/a.png"));
    assert_eq!(users[1].username, "bob");
    assert!(users[1].avatar_url.is_none());
}

#[test]
fn blank_display_name_falls_back_to_username() {
    let users = parse_ranking(RANKING_JSON).unwrap();
    assert_eq!(users[0].label(), "Alice");
    assert_eq!(users[2].label(), "carol");
}

#[test]
fn missing_ranking_field_is_malformed() {
    let err = parse_ranking(r#"{"users": []}"#).unwrap_err();
    assert!(matches!(err, WidgetError::MalformedData(_)));
    assert!(err.to_string().contains("ranking"));
}

#[test]
fn invalid_json_is_malformed() {
    let err = parse_ranking("<html>404</html>").unwrap_err();
    assert!(matches!(err, WidgetError::MalformedData(_)));
}

#[test]
fn entry_without_user_is_malformed() {
    let err = parse_ranking(r#"{"ranking": [{"rank": 1}]}"#).unwrap_err();
    assert!(matches!(err, WidgetError::MalformedData(_)));
}

#[test]
fn empty_ranking_is_valid() {
    let users = parse_ranking(r#"{"ranking": []}"#).unwrap();
    assert!(users.is_empty());
}

#[tokio::test]
async fn load_reads_local_file() {
    let path = scratch_path("ranking.json");
    std::fs::write(&path, RANKING_JSON).unwrap();

    let loader = RankingLoader::new().unwrap();
    let users = loader.load(path.to_str().unwrap()).await.unwrap();
    assert_eq!(users.len(), 3);

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn missing_local_file_is_not_found() {
    let path = scratch_path("does-not-exist.json");
    let loader = RankingLoader::new().unwrap();

    let err = loader.load(path.to_str().unwrap()).await.unwrap_err();
    assert!(matches!(err, WidgetError::NotFound(_)));
}

#[tokio::test]
async fn load_first_falls_back_to_second_source() {
    let good = scratch_path("fallback.json");
    std::fs::write(&good, RANKING_JSON).unwrap();
    let missing = scratch_path("primary-missing.json");

    let loader = RankingLoader::new().unwrap();
    let sources = vec![
        missing.to_string_lossy().into_owned(),
        good.to_string_lossy().into_owned(),
    ];
    let users = loader.load_first(&sources).await.unwrap();
    assert_eq!(users[0].username, "alice");

    let _ = std::fs::remove_file(&good);
}

#[tokio::test]
async fn load_first_reports_last_failure() {
    let bad = scratch_path("bad.json");
    std::fs::write(&bad, r#"{"nope": true}"#).unwrap();
    let missing = scratch_path("missing.json");

    let loader = RankingLoader::new().unwrap();
    let sources = vec![
        missing.to_string_lossy().into_owned(),
        bad.to_string_lossy().into_owned(),
    ];
    let err = loader.load_first(&sources).await.unwrap_err();
    assert!(matches!(err, WidgetError::MalformedData(_)));

    let _ = std::fs::remove_file(&bad);
}
