//! Tests for conversation configuration.

use std::sync::{Mutex, OnceLock};
use std::time::Duration;

use connect_worlds::config::{ConversationConfig, TurnSchedule, TIMEOUT_ENV_VAR};
use connect_worlds::error::WorldsError;
use connect_worlds::world::World;

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

struct EnvGuard {
    saved: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    fn capture(keys: &[&str]) -> Self {
        let saved = keys
            .iter()
            .map(|key| ((*key).to_string(), std::env::var(key).ok()))
            .collect();
        Self { saved }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (key, value) in &self.saved {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }
    }
}

fn env_lock_guard() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn with_worlds(worlds: Vec<World>) -> ConversationConfig {
    ConversationConfig::builder().worlds(worlds).build()
}

fn assert_config_error(config: ConversationConfig, needle: &str) {
    match config.validate() {
        Err(WorldsError::Configuration(message)) => {
            assert!(message.contains(needle), "{message:?} lacks {needle:?}")
        }
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn builder_overrides_schedule_and_limit() {
    let config = ConversationConfig::builder()
        .schedule(TurnSchedule::every(Duration::from_millis(10)))
        .max_turns(2)
        .request_timeout(Duration::from_secs(1))
        .build();

    assert_eq!(config.schedule().interval(), Duration::from_millis(10));
    assert_eq!(config.max_turns(), Some(2));
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(1)));
    assert_eq!(config.worlds().len(), 2);
}

#[test]
fn immediate_schedule_has_zero_interval() {
    assert_eq!(TurnSchedule::immediate().interval(), Duration::ZERO);
}

#[test]
fn with_max_turns_replaces_limit() {
    let config = ConversationConfig::default().with_max_turns(Some(3));
    assert_eq!(config.max_turns(), Some(3));
    assert_eq!(config.with_max_turns(None).max_turns(), None);
}

#[test]
fn validate_rejects_wrong_world_count() {
    assert_config_error(
        with_worlds(vec![World::text("A", "http://a.test")]),
        "exactly 2 worlds",
    );
    assert_config_error(with_worlds(vec![]), "got 0");
}

#[test]
fn validate_rejects_duplicate_names() {
    assert_config_error(
        with_worlds(vec![
            World::text("A", "http://a.test"),
            World::json("A", "http://b.test"),
        ]),
        "duplicate world name",
    );
}

#[test]
fn validate_rejects_blank_names() {
    assert_config_error(
        with_worlds(vec![
            World::text("  ", "http://a.test"),
            World::json("B", "http://b.test"),
        ]),
        "must not be empty",
    );
}

#[test]
fn validate_rejects_non_http_urls() {
    assert_config_error(
        with_worlds(vec![
            World::text("A", "ftp://a.test"),
            World::json("B", "http://b.test"),
        ]),
        "non-HTTP base URL",
    );
}

#[test]
fn from_env_reads_request_timeout() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&[TIMEOUT_ENV_VAR]);

    std::env::set_var(TIMEOUT_ENV_VAR, "1500");
    let config = ConversationConfig::from_env().unwrap();

    assert_eq!(config.request_timeout(), Some(Duration::from_millis(1500)));
    assert_eq!(config.worlds()[0].name, "Helidon");
}

#[test]
fn from_env_without_timeout_waits_indefinitely() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&[TIMEOUT_ENV_VAR]);

    std::env::remove_var(TIMEOUT_ENV_VAR);
    let config = ConversationConfig::from_env().unwrap();

    assert_eq!(config.request_timeout(), None);
}

#[test]
fn from_env_rejects_unparseable_timeout() {
    let _env_lock = env_lock_guard();
    let _env_guard = EnvGuard::capture(&[TIMEOUT_ENV_VAR]);

    std::env::set_var(TIMEOUT_ENV_VAR, "forever");
    let err = ConversationConfig::from_env().unwrap_err();

    assert!(matches!(err, WorldsError::Configuration(_)));
}
