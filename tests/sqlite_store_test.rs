//! Integration tests for the SQLite achievement store

mod common;

use chrono::Utc;

use lectio::achievements::{
    AchievementDefinition, AchievementEngine, EvaluationRequest, TriggerContext, TriggerType,
    TriggerValue,
};
use lectio::config::Config;
use lectio::store::{AchievementStore, SqliteStore};

use common::{local, new_schedule};

#[test]
fn test_unlocks_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("achievements.db");
    let now = local(2026, 6, 20, 9, 0);
    let schedule = new_schedule(3.0, now);

    {
        let engine = AchievementEngine::new(SqliteStore::open(&path).unwrap());
        let first = engine
            .evaluate(
                "reader",
                EvaluationRequest::new(Some(&schedule), TriggerContext::PlanCreated),
                &now,
            )
            .unwrap();
        assert_eq!(first.unwrap().id, "first_plan");
    }

    let engine = AchievementEngine::new(SqliteStore::open(&path).unwrap());
    let again = engine
        .evaluate(
            "reader",
            EvaluationRequest::new(Some(&schedule), TriggerContext::PlanCreated),
            &now,
        )
        .unwrap();
    assert!(again.is_none());

    let records = engine.store().user_achievements("reader").unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].unlocked_at, now.with_timezone(&Utc));
}

#[test]
fn test_replaced_definitions_follow_order_field() {
    let store = SqliteStore::open_in_memory().unwrap();
    let mut late = AchievementDefinition::new(
        "late",
        TriggerType::ChaptersRead,
        Some(TriggerValue::Number(1.0)),
        "milestone",
    );
    late.order = Some(2);
    let mut early = AchievementDefinition::new(
        "early",
        TriggerType::ChaptersRead,
        Some(TriggerValue::Text("1".to_string())),
        "milestone",
    );
    early.order = Some(1);
    let unordered =
        AchievementDefinition::new("unordered", TriggerType::PlanStarted, None, "plan");

    store
        .replace_definitions(&[unordered, late, early])
        .unwrap();
    let ids: Vec<String> = store
        .definitions()
        .unwrap()
        .into_iter()
        .map(|d| d.id)
        .collect();
    assert_eq!(ids, vec!["early", "late", "unordered"]);
}

#[test]
fn test_definitions_seed_file_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let defs_path = dir.path().join("definitions.json");
    std::fs::write(
        &defs_path,
        r#"[
            {"id": "two_chapters", "triggerType": "chapters_read", "triggerValue": "2", "category": "milestone", "order": 1},
            {"id": "started", "triggerType": "plan_started", "category": "plan", "title": "Started"}
        ]"#,
    )
    .unwrap();

    let mut config = Config::default();
    config.store.database = Some(dir.path().join("achievements.db"));
    config.store.definitions = Some(defs_path);

    let store = SqliteStore::open(&config.database_path()).unwrap();
    store
        .replace_definitions(&config.load_definitions().unwrap().unwrap())
        .unwrap();

    let defs = store.definitions().unwrap();
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].id, "two_chapters");
    assert_eq!(defs[0].trigger_value.as_ref().unwrap().as_count(), Some(2));
    assert_eq!(defs[1].display_name(), "Started");
}

#[test]
fn test_mark_notified_scoped_to_user() {
    let store = SqliteStore::open_in_memory().unwrap();
    let now = local(2026, 6, 20, 9, 0);
    let schedule = new_schedule(3.0, now);
    let engine = AchievementEngine::new(store);
    engine
        .evaluate(
            "a",
            EvaluationRequest::new(Some(&schedule), TriggerContext::PlanCreated),
            &now,
        )
        .unwrap();

    assert!(!engine.store().mark_notified("b", "first_plan").unwrap());
    assert!(engine.store().mark_notified("a", "first_plan").unwrap());
    assert!(engine.store().user_achievements("a").unwrap()[0].notified);
}
