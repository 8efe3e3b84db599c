//! Turn-taking between two worlds.
//!
//! Each turn sends one world the other world's latest reply (or an opening
//! greeting), stores the answer, and moves on to the counterpart.

pub mod greeting;
pub mod runner;
pub mod state;

pub use greeting::{FixedGreeting, GreetingSource, RandomGreetings, GREETINGS};
pub use runner::{Conversation, ConversationId, TurnEvent, TurnEventSink};
pub use state::{ConversationState, TurnRecord};
