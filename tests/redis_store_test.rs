//! Redis session store tests
//!
//! Need a running Redis (`TEST_REDIS_URL`, default `redis://localhost:6379`):
//! `cargo test --test redis_store_test -- --ignored`

use chrono::Duration;
use relocompass::config::RedisConfig;
use relocompass::models::{Answer, Stage};
use relocompass::state::{OnboardingStep, RedisSessionStore, Session};
use relocompass::SessionStore;

async fn redis_store(prefix: &str) -> RedisSessionStore {
    let url = std::env::var("TEST_REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());
    let config = RedisConfig {
        url,
        prefix: format!("relocompass_test:{}:{}:", prefix, uuid::Uuid::new_v4()),
    };

    let store = RedisSessionStore::new(config, 3_600).await.expect("Redis is reachable");
    store.test_connection().await.expect("Redis answers PING");
    store
}

#[tokio::test]
#[ignore = "requires a running Redis"]
async fn test_redis_round_trip() {
    let store = redis_store("round_trip").await;

    let mut session = Session::new(501);
    session.begin(Duration::hours(1));
    session.record(Answer::Stage(Stage::Searching)).unwrap();
    store.set(&session).await.unwrap();

    let loaded = store.get(501).await.unwrap().unwrap();
    assert_eq!(loaded.step, Some(OnboardingStep::AwaitingFamily));
    assert_eq!(loaded.answers.stage, Some(Stage::Searching));
    assert!(store.get(502).await.unwrap().is_none());

    store.clear(501).await.unwrap();
    assert!(store.get(501).await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires a running Redis"]
async fn test_redis_expired_session_reads_as_absent() {
    let store = redis_store("expired").await;

    let mut session = Session::new(601);
    session.begin(Duration::hours(1));
    session.touch(Duration::seconds(-30));
    store.set(&session).await.unwrap();

    assert!(store.get(601).await.unwrap().is_none());
    // the expired payload was deleted on read
    assert!(store.get(601).await.unwrap().is_none());
    assert_eq!(store.purge_expired().await.unwrap(), 0);
}
