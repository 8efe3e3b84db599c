//! Transport seam between the turn-taking loop and the worlds it talks to.

pub mod http;

pub use http::HttpTransport;

use async_trait::async_trait;

use crate::error::Result;
use crate::world::World;

/// Delivers one message to a world and returns its reply text.
///
/// Implementations decode the body according to the world's
/// [`ResponseFormat`](crate::world::ResponseFormat).
#[async_trait]
pub trait WorldTransport: Send + Sync {
    async fn exchange(&self, world: &World, message: &str) -> Result<String>;
}
