//! Command-line arguments and console output for the `connect-worlds` binary.

use std::future::Future;

use clap::Parser;

use crate::conversation::TurnEvent;

/// Keep two worlds talking to each other.
///
/// The worlds themselves are built in: Helidon on localhost:9090 (JSON)
/// and Quarkus on localhost:8080 (text).
#[derive(Parser, Debug)]
#[command(name = "connect-worlds", version, about = "Relay a conversation between two HTTP services")]
pub struct Cli {
    /// Stop after this many turns (default: run until interrupted)
    #[arg(short = 'n', long)]
    pub turns: Option<u64>,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log filter used when RUST_LOG is not set.
    pub fn default_log_filter(&self) -> &'static str {
        if self.verbose {
            "connect_worlds=debug"
        } else {
            "connect_worlds=info"
        }
    }
}

/// Console line for a turn event.
///
/// A message about to be sent prints as `"<from> => <to>: <message>"`; a
/// stored reply closes the turn with an empty line.
pub fn console_line(event: &TurnEvent) -> String {
    match event {
        TurnEvent::Sending {
            from, to, message, ..
        } => format!("{from} => {to}: {message}"),
        TurnEvent::Replied { .. } => String::new(),
    }
}

/// Resolve once `signal` fires, passing on a failure to listen for it.
pub async fn interrupted<F>(signal: F) -> std::io::Result<()>
where
    F: Future<Output = std::io::Result<()>>,
{
    signal.await?;
    tracing::info!("interrupted");
    Ok(())
}
