//! Convenience re-exports for common use.

pub use crate::config::{ConversationConfig, TurnSchedule};
pub use crate::conversation::{
    Conversation, ConversationState, GreetingSource, RandomGreetings, TurnEvent, TurnRecord,
};
pub use crate::error::{Result, WorldsError};
pub use crate::transport::{HttpTransport, WorldTransport};
pub use crate::world::{ResponseFormat, World};
