//! The turn-taking loop.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use super::greeting::{GreetingSource, RandomGreetings};
use super::state::{ConversationState, TurnRecord};
use crate::config::ConversationConfig;
use crate::error::Result;
use crate::transport::{HttpTransport, WorldTransport};

/// Unique conversation identifier, attached to log events.
pub type ConversationId = Uuid;

/// Observer callback for turn progress.
pub type TurnEventSink = Arc<dyn Fn(&TurnEvent) + Send + Sync>;

/// Progress notifications emitted while a conversation runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnEvent {
    /// `message` from `from` is about to be delivered to `to`.
    Sending {
        turn: u64,
        from: String,
        to: String,
        message: String,
    },
    /// `world` answered and its reply has been stored.
    Replied {
        turn: u64,
        world: String,
        reply: String,
    },
}

/// Two worlds taking turns, each answering the other's last reply.
pub struct Conversation {
    id: ConversationId,
    config: ConversationConfig,
    transport: Arc<dyn WorldTransport>,
    greetings: Box<dyn GreetingSource>,
    sink: Option<TurnEventSink>,
    state: ConversationState,
    log: Vec<TurnRecord>,
    next: usize,
    turns: u64,
}

impl std::fmt::Debug for Conversation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Conversation")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("state", &self.state)
            .field("turns", &self.turns)
            .finish_non_exhaustive()
    }
}

impl Conversation {
    /// Create a conversation over `transport`.
    ///
    /// Fails if the config does not describe exactly two distinct worlds.
    pub fn new(config: ConversationConfig, transport: Arc<dyn WorldTransport>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            config,
            transport,
            greetings: Box::new(RandomGreetings::new()),
            sink: None,
            state: ConversationState::new(),
            log: Vec::new(),
            next: 0,
            turns: 0,
        })
    }

    /// Create a conversation that talks HTTP, honoring the config's request timeout.
    pub fn over_http(config: ConversationConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.request_timeout())?;
        Self::new(config, Arc::new(transport))
    }

    pub fn with_greetings(mut self, greetings: impl GreetingSource + 'static) -> Self {
        self.greetings = Box::new(greetings);
        self
    }

    pub fn with_event_sink(mut self, sink: TurnEventSink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn config(&self) -> &ConversationConfig {
        &self.config
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn turn_log(&self) -> &[TurnRecord] {
        &self.log
    }

    /// Number of completed turns.
    pub fn turns_taken(&self) -> u64 {
        self.turns
    }

    /// Run one turn for the next world in line.
    ///
    /// The world receives its counterpart's latest reply, or a greeting if
    /// the counterpart has not spoken yet. On error nothing is recorded and
    /// the same world stays next in line.
    pub async fn step(&mut self) -> Result<TurnRecord> {
        let worlds = self.config.worlds();
        let world = worlds[self.next].clone();
        let counterpart = worlds[1 - self.next].name.clone();
        let turn = self.turns + 1;

        let message = match self.state.last_reply(&counterpart) {
            Some(reply) => reply.to_string(),
            None => self.greetings.pick().to_string(),
        };

        self.emit(TurnEvent::Sending {
            turn,
            from: counterpart,
            to: world.name.clone(),
            message: message.clone(),
        });

        let reply = self.transport.exchange(&world, &message).await?;
        debug!(conversation = %self.id, turn, world = %world.name, reply = %reply, "turn completed");

        self.state.record(world.name.clone(), reply.clone());
        let record = TurnRecord {
            turn,
            world: world.name.clone(),
            sent: message,
            reply: reply.clone(),
            at: Utc::now(),
            state: self.state.snapshot(),
        };
        self.log.push(record.clone());
        self.turns = turn;
        self.next = 1 - self.next;

        self.emit(TurnEvent::Replied {
            turn,
            world: world.name,
            reply,
        });

        Ok(record)
    }

    /// Keep taking turns until the turn limit, or forever without one.
    ///
    /// Pauses for the configured schedule after every turn that is not the
    /// last. The first error ends the run and is returned as-is. Returns the
    /// total number of completed turns.
    pub async fn run(&mut self) -> Result<u64> {
        info!(
            conversation = %self.id,
            worlds = ?self.config.worlds().iter().map(|w| w.name.as_str()).collect::<Vec<_>>(),
            max_turns = ?self.config.max_turns(),
            "conversation started"
        );

        while !self.limit_reached() {
            self.step().await?;
            if !self.limit_reached() {
                self.config.schedule().pause().await;
            }
        }

        info!(conversation = %self.id, turns = self.turns, "conversation finished");
        Ok(self.turns)
    }

    fn limit_reached(&self) -> bool {
        self.config
            .max_turns()
            .is_some_and(|max| self.turns >= max)
    }

    fn emit(&self, event: TurnEvent) {
        if let Some(sink) = &self.sink {
            sink(&event);
        }
    }
}
