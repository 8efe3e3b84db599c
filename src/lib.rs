//! connect-worlds — keep two HTTP services talking to each other.
//!
//! Two fixed endpoints ("worlds") take turns: each receives the other's
//! latest reply as a path segment and answers with its next line.
//!
//! # Quick Start
//!
//! ```no_run
//! use connect_worlds::prelude::*;
//!
//! # async fn example() -> connect_worlds::error::Result<()> {
//! let config = ConversationConfig::builder().max_turns(6).build();
//! let mut conversation = Conversation::over_http(config)?;
//! conversation.run().await?;
//! for (world, reply) in conversation.state().iter() {
//!     println!("{world}: {reply}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod conversation;
pub mod error;
pub mod prelude;
pub mod transport;
pub mod util;
pub mod world;

#[cfg(feature = "cli")]
pub mod cli;
