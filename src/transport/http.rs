//! HTTP transport backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::WorldTransport;
use crate::error::Result;
use crate::util::timeout::with_optional_timeout;
use crate::world::World;

/// Sends `GET <base_url>/<message>` and reads the reply body.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    request_timeout: Option<Duration>,
}

impl HttpTransport {
    /// Build a transport. The HTTP status is not checked: whatever body
    /// comes back is the reply. With `request_timeout` unset a hung endpoint
    /// blocks the exchange indefinitely.
    pub fn new(request_timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self::with_client(client, request_timeout))
    }

    pub fn with_client(client: reqwest::Client, request_timeout: Option<Duration>) -> Self {
        Self {
            client,
            request_timeout,
        }
    }

    async fn get(&self, world: &World, message: &str) -> Result<String> {
        let url = world.request_url(message);
        debug!(world = %world.name, url = %url, "sending message");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;

        // Error pages are replies like any other; a JSON world still
        // rejects a body it cannot read.
        debug!(world = %world.name, status = status.as_u16(), "received reply");
        world.parse_reply(body)
    }
}

#[async_trait]
impl WorldTransport for HttpTransport {
    async fn exchange(&self, world: &World, message: &str) -> Result<String> {
        with_optional_timeout(self.request_timeout, self.get(world, message)).await
    }
}
