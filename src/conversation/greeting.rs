//! Opening lines used before a world has heard anything from its counterpart.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Greetings a conversation can open with.
pub const GREETINGS: [&str; 4] = [
    "Hello",
    "How are you today?",
    "How are things?",
    "Are you having a good day?",
];

/// Source of opening messages.
pub trait GreetingSource: Send {
    fn pick(&mut self) -> &'static str;
}

/// Draws uniformly from [`GREETINGS`].
#[derive(Debug, Clone)]
pub struct RandomGreetings {
    rng: StdRng,
}

impl RandomGreetings {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGreetings {
    fn default() -> Self {
        Self::new()
    }
}

impl GreetingSource for RandomGreetings {
    fn pick(&mut self) -> &'static str {
        GREETINGS[self.rng.gen_range(0..GREETINGS.len())]
    }
}

/// Always opens with the same line.
#[derive(Debug, Clone, Copy)]
pub struct FixedGreeting(pub &'static str);

impl GreetingSource for FixedGreeting {
    fn pick(&mut self) -> &'static str {
        self.0
    }
}
