//! Latest replies per world and the in-memory turn log.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Most recent reply from each world, keyed by world name.
///
/// A missing entry means the world has not replied yet. Each visit
/// overwrites that world's entry, so the map never grows past one entry
/// per world.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationState {
    replies: BTreeMap<String, String>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_reply(&self, world: &str) -> Option<&str> {
        self.replies.get(world).map(String::as_str)
    }

    /// Store `reply` as `world`'s latest answer, returning the one it replaces.
    pub fn record(&mut self, world: impl Into<String>, reply: impl Into<String>) -> Option<String> {
        self.replies.insert(world.into(), reply.into())
    }

    pub fn len(&self) -> usize {
        self.replies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.replies.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.replies.clone()
    }
}

/// One completed turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// 1-based turn number within the conversation.
    pub turn: u64,
    pub world: String,
    pub sent: String,
    pub reply: String,
    pub at: DateTime<Utc>,
    /// State as it stood right after this turn.
    pub state: BTreeMap<String, String>,
}
