//! Shared test helpers and scripted transport.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use connect_worlds::error::{Result, WorldsError};
use connect_worlds::transport::WorldTransport;
use connect_worlds::world::World;

/// A transport that answers from per-world queues and records every call.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<String, Vec<String>>>,
    fallback: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a one-off reply for `world`.
    pub fn queue_reply(&self, world: &str, reply: &str) {
        self.replies
            .lock()
            .unwrap()
            .entry(world.to_string())
            .or_default()
            .push(reply.to_string());
    }

    /// Reply used for `world` once its queue is empty.
    pub fn always_reply(&self, world: &str, reply: &str) {
        self.fallback
            .lock()
            .unwrap()
            .insert(world.to_string(), reply.to_string());
    }

    /// `(world, message)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorldTransport for ScriptedTransport {
    async fn exchange(&self, world: &World, message: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((world.name.clone(), message.to_string()));

        let mut replies = self.replies.lock().unwrap();
        if let Some(queue) = replies.get_mut(&world.name) {
            if !queue.is_empty() {
                return Ok(queue.remove(0));
            }
        }
        self.fallback
            .lock()
            .unwrap()
            .get(&world.name)
            .cloned()
            .ok_or_else(|| WorldsError::missing_field(&world.name, "message"))
    }
}
