//! Conversation configuration: the two-world registry and run policy.

use std::collections::HashSet;
use std::time::Duration;

use bon::Builder;

use crate::error::{Result, WorldsError};
use crate::world::World;

/// Environment variable holding an optional per-request timeout in milliseconds.
pub const TIMEOUT_ENV_VAR: &str = "CONNECT_WORLDS_TIMEOUT_MS";

/// Pause between turns when nothing else is configured.
pub const DEFAULT_TURN_INTERVAL: Duration = Duration::from_millis(4000);

/// Number of worlds a conversation is defined for.
pub const WORLD_COUNT: usize = 2;

/// The built-in registry: a JSON-speaking Helidon service and a
/// text-speaking Quarkus service on localhost.
pub fn default_worlds() -> Vec<World> {
    vec![
        World::with_content_type("Helidon", "http://localhost:9090/message", "application/json"),
        World::with_content_type("Quarkus", "http://localhost:8080/message", "application/text"),
    ]
}

/// How long the loop pauses after each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSchedule {
    interval: Duration,
}

impl TurnSchedule {
    pub fn every(interval: Duration) -> Self {
        Self { interval }
    }

    /// No pause between turns.
    pub fn immediate() -> Self {
        Self::every(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub(crate) async fn pause(&self) {
        if !self.interval.is_zero() {
            tokio::time::sleep(self.interval).await;
        }
    }
}

impl Default for TurnSchedule {
    fn default() -> Self {
        Self::every(DEFAULT_TURN_INTERVAL)
    }
}

/// Immutable settings handed to a [`Conversation`](crate::conversation::Conversation).
///
/// ```
/// use connect_worlds::config::{ConversationConfig, TurnSchedule};
///
/// let config = ConversationConfig::builder()
///     .schedule(TurnSchedule::immediate())
///     .max_turns(4)
///     .build();
/// assert_eq!(config.worlds().len(), 2);
/// assert_eq!(config.max_turns(), Some(4));
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ConversationConfig {
    #[builder(default = default_worlds())]
    worlds: Vec<World>,
    #[builder(default)]
    schedule: TurnSchedule,
    /// Stop after this many turns; `None` runs until interrupted.
    max_turns: Option<u64>,
    /// Per-request timeout; `None` waits on a remote endpoint indefinitely.
    request_timeout: Option<Duration>,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ConversationConfig {
    /// Default registry plus ambient settings from the environment.
    ///
    /// Loads `.env` if present. Only the request timeout is read from the
    /// environment; the worlds themselves are never overridden there.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let request_timeout = match std::env::var(TIMEOUT_ENV_VAR) {
            Ok(raw) => Some(parse_timeout_ms(&raw)?),
            Err(_) => None,
        };
        Ok(Self::builder().maybe_request_timeout(request_timeout).build())
    }

    pub fn worlds(&self) -> &[World] {
        &self.worlds
    }

    pub fn schedule(&self) -> TurnSchedule {
        self.schedule
    }

    pub fn max_turns(&self) -> Option<u64> {
        self.max_turns
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }

    /// Copy of this config with a different turn limit.
    pub fn with_max_turns(mut self, max_turns: Option<u64>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Check the registry is something the turn-taking loop can address.
    ///
    /// Counterparts are found by "the other world", which only has a
    /// meaning with exactly two distinctly named worlds.
    pub fn validate(&self) -> Result<()> {
        if self.worlds.len() != WORLD_COUNT {
            return Err(WorldsError::Configuration(format!(
                "expected exactly {WORLD_COUNT} worlds, got {}",
                self.worlds.len()
            )));
        }

        let mut seen = HashSet::new();
        for world in &self.worlds {
            if world.name.trim().is_empty() {
                return Err(WorldsError::Configuration(
                    "world name must not be empty".to_string(),
                ));
            }
            if !seen.insert(world.name.as_str()) {
                return Err(WorldsError::Configuration(format!(
                    "duplicate world name: {}",
                    world.name
                )));
            }
            if !(world.base_url.starts_with("http://") || world.base_url.starts_with("https://"))
            {
                return Err(WorldsError::Configuration(format!(
                    "world {} has a non-HTTP base URL: {}",
                    world.name, world.base_url
                )));
            }
        }

        Ok(())
    }
}

fn parse_timeout_ms(raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| {
            WorldsError::Configuration(format!(
                "{TIMEOUT_ENV_VAR} must be a whole number of milliseconds, got '{raw}'"
            ))
        })
}
