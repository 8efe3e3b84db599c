//! Timeout helper.

use std::future::Future;
use std::time::Duration;

use crate::error::{Result, WorldsError};

/// Wrap a future with a timeout.
pub async fn with_timeout<T>(
    duration: Duration,
    future: impl Future<Output = Result<T>>,
) -> Result<T> {
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(WorldsError::Timeout(duration.as_millis() as u64)),
    }
}

/// Apply `duration` if one is set; otherwise await `future` unbounded.
pub async fn with_optional_timeout<T>(
    duration: Option<Duration>,
    future: impl Future<Output = Result<T>>,
) -> Result<T> {
    match duration {
        Some(duration) => with_timeout(duration, future).await,
        None => future.await,
    }
}
