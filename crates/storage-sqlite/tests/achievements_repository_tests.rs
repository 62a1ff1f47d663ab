//! Integration tests for the SQLite achievements repository.

use chrono::{Duration, Utc};
use tempfile::TempDir;

use scamguard_core::achievements::AchievementRepositoryTrait;
use scamguard_storage_sqlite::achievements::AchievementRepository;
use scamguard_storage_sqlite::db;

fn setup() -> (TempDir, AchievementRepository) {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("scamguard.db");
    let (pool, writer) = db::init(db_path.to_str().unwrap()).expect("db init");
    (dir, AchievementRepository::new(pool, writer))
}

#[tokio::test]
async fn starts_with_nothing_earned() {
    let (_dir, repo) = setup();
    assert!(!repo.is_earned("first-correct-answer").unwrap());
    assert!(repo.list_earned().unwrap().is_empty());
}

#[tokio::test]
async fn mark_earned_persists_the_flag() {
    let (_dir, repo) = setup();
    let now = Utc::now();

    let earned = repo.mark_earned("first-correct-answer", now).await.unwrap();
    assert_eq!(earned.achievement_id, "first-correct-answer");

    assert!(repo.is_earned("first-correct-answer").unwrap());
    let all = repo.list_earned().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].achievement_id, "first-correct-answer");
}

#[tokio::test]
async fn mark_earned_is_write_once() {
    let (_dir, repo) = setup();
    let first_time = Utc::now();
    let later = first_time + Duration::hours(3);

    let first = repo.mark_earned("sms-expert", first_time).await.unwrap();
    let second = repo.mark_earned("sms-expert", later).await.unwrap();

    // The original timestamp survives the second grant.
    assert_eq!(first.earned_at, second.earned_at);
    assert_eq!(repo.list_earned().unwrap().len(), 1);
}

#[tokio::test]
async fn list_earned_returns_all_flags() {
    let (_dir, repo) = setup();
    let now = Utc::now();

    repo.mark_earned("first-correct-answer", now).await.unwrap();
    repo.mark_earned("first-simulation-completed", now).await.unwrap();
    repo.mark_earned("email-expert", now).await.unwrap();

    let mut ids: Vec<String> = repo
        .list_earned()
        .unwrap()
        .into_iter()
        .map(|e| e.achievement_id)
        .collect();
    ids.sort();
    assert_eq!(
        ids,
        vec![
            "email-expert".to_string(),
            "first-correct-answer".to_string(),
            "first-simulation-completed".to_string(),
        ]
    );
}
