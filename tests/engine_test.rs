//! Integration tests for achievement evaluation against the bundled definitions

mod common;

use chrono::Utc;
use std::sync::Arc;

use lectio::achievements::{AchievementEngine, EvaluationRequest, TriggerContext};
use lectio::catalog::BibleCatalog;
use lectio::plan::PlanStatus;
use lectio::store::{AchievementStore, MemoryStore, SqliteStore};

use common::{local, new_schedule, read_daily};

#[test]
fn test_plan_created_announces_first_plan() {
    let engine = AchievementEngine::new(MemoryStore::with_defaults());
    let now = local(2026, 6, 20, 9, 0);
    let schedule = new_schedule(3.0, now);

    let outcome = engine
        .evaluate_pass(
            "reader",
            EvaluationRequest::new(Some(&schedule), TriggerContext::PlanCreated),
            &now,
        )
        .unwrap();

    assert_eq!(outcome.announced.unwrap().id, "first_plan");
    assert_eq!(outcome.unlocked, vec!["first_plan"]);
}

#[test]
fn test_streak_of_seven_unlocks_three_and_seven() {
    let engine = AchievementEngine::new(MemoryStore::with_defaults());
    let now = local(2026, 6, 20, 19, 0);
    let mut schedule = new_schedule(1.0, local(2026, 6, 14, 9, 0));
    read_daily(&mut schedule, 7, now);

    let outcome = engine
        .evaluate_pass("reader", EvaluationRequest::progress(&schedule), &now)
        .unwrap();

    assert_eq!(outcome.announced.unwrap().id, "streak_3");
    assert_eq!(outcome.unlocked, vec!["streak_3", "streak_7", "chapters_1"]);

    // A second pass with the same state finds nothing new
    let again = engine
        .evaluate("reader", EvaluationRequest::progress(&schedule), &now)
        .unwrap();
    assert!(again.is_none());
    assert_eq!(engine.store().user_achievements("reader").unwrap().len(), 3);
}

#[test]
fn test_finishing_genesis() {
    let catalog = BibleCatalog::global();
    let engine = AchievementEngine::new(MemoryStore::with_defaults());
    let now = local(2026, 6, 20, 10, 0);
    let mut schedule = new_schedule(50.0, now);

    schedule.mark_read(&catalog.chapters_for_book("gn")[..49], now.with_timezone(&Utc), catalog);
    let first = engine
        .evaluate_pass("reader", EvaluationRequest::progress(&schedule), &now)
        .unwrap();
    assert_eq!(first.unlocked, vec!["chapters_1"]);

    schedule.mark_read(&["gn-50"], now.with_timezone(&Utc), catalog);
    let second = engine
        .evaluate("reader", EvaluationRequest::progress(&schedule), &now)
        .unwrap();
    assert_eq!(second.unwrap().id, "book_genesis");
}

#[test]
fn test_late_night_reading_uses_local_hour() {
    let catalog = BibleCatalog::global();
    let engine = AchievementEngine::new(MemoryStore::with_defaults());
    // 02:30 in UTC-3 is 05:30 UTC
    let read_at = local(2026, 6, 20, 2, 30);
    let mut schedule = new_schedule(1.0, read_at);
    schedule.mark_read(&["mt-1"], read_at.with_timezone(&Utc), catalog);

    let outcome = engine
        .evaluate_pass("reader", EvaluationRequest::progress(&schedule), &read_at)
        .unwrap();
    assert_eq!(outcome.unlocked, vec!["chapters_1", "night_owl"]);
}

#[test]
fn test_time_rules_ignored_outside_progress_updates() {
    let catalog = BibleCatalog::global();
    let engine = AchievementEngine::new(MemoryStore::with_defaults());
    let read_at = local(2026, 12, 25, 5, 0);
    let mut schedule = new_schedule(1.0, read_at);
    schedule.mark_read(&["lc-2"], read_at.with_timezone(&Utc), catalog);

    let request = EvaluationRequest::new(Some(&schedule), TriggerContext::AppLoad)
        .with_last_completion(schedule.read_completion_timestamps.last().copied());
    let outcome = engine.evaluate_pass("reader", request, &read_at).unwrap();
    assert_eq!(outcome.unlocked, vec!["chapters_1"]);

    let outcome = engine
        .evaluate_pass("reader", EvaluationRequest::progress(&schedule), &read_at)
        .unwrap();
    assert_eq!(outcome.unlocked, vec!["early_bird", "holiday_reader"]);
}

#[test]
fn test_plan_completed_unlocks_finisher() {
    let catalog = BibleCatalog::global();
    let engine = AchievementEngine::new(MemoryStore::with_defaults());
    let now = local(2027, 1, 10, 20, 0);
    let mut schedule = new_schedule(4.0, local(2026, 1, 10, 8, 0));

    let all: Vec<String> = catalog
        .book_list()
        .iter()
        .flat_map(|b| catalog.chapters_for_book(&b.abbrev))
        .collect();
    schedule.mark_read(&all, now.with_timezone(&Utc), catalog);
    assert_eq!(schedule.status, PlanStatus::Completed);

    let outcome = engine
        .evaluate_pass(
            "reader",
            EvaluationRequest::new(Some(&schedule), TriggerContext::PlanCompleted),
            &now,
        )
        .unwrap();
    assert_eq!(outcome.announced.unwrap().id, "plan_finisher");
    assert!(outcome.unlocked.contains(&"section_nt".to_string()));
    assert!(outcome.unlocked.contains(&"book_psalms".to_string()));
    assert!(!outcome.unlocked.contains(&"first_plan".to_string()));
}

#[test]
fn test_no_schedule_only_schedule_free_rules() {
    let engine = AchievementEngine::new(MemoryStore::with_defaults());
    let now = local(2026, 6, 20, 9, 0);
    let outcome = engine
        .evaluate_pass("reader", EvaluationRequest::new(None, TriggerContext::AppLoad), &now)
        .unwrap();
    assert!(outcome.unlocked.is_empty());
}

#[test]
fn test_concurrent_passes_unlock_once() {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(SqliteStore::open(&dir.path().join("achievements.db")).unwrap());
    let engine = AchievementEngine::new(Arc::clone(&store));
    let now = local(2026, 6, 20, 19, 0);
    let mut schedule = new_schedule(1.0, local(2026, 6, 18, 9, 0));
    read_daily(&mut schedule, 3, now);

    let announced: Vec<Option<String>> = std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    engine
                        .evaluate("reader", EvaluationRequest::progress(&schedule), &now)
                        .unwrap()
                        .map(|d| d.id)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(announced.iter().filter(|a| a.is_some()).count(), 1);
    let ids = store.unlocked_ids("reader").unwrap();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains("streak_3"));
    assert!(ids.contains("chapters_1"));
}
