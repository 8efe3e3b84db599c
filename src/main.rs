//! connect-worlds binary entry point.

use std::sync::Arc;

use clap::Parser;
use connect_worlds::cli::{console_line, interrupted, Cli};
use connect_worlds::config::ConversationConfig;
use connect_worlds::conversation::{Conversation, TurnEvent};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.default_log_filter())),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(cli).await {
        tracing::warn!(error = %e, "conversation aborted");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConversationConfig::from_env()?.with_max_turns(cli.turns);

    let sink = Arc::new(|event: &TurnEvent| println!("{}", console_line(event)));
    let mut conversation = Conversation::over_http(config)?.with_event_sink(sink);

    tokio::select! {
        result = conversation.run() => {
            result?;
        }
        signal = interrupted(tokio::signal::ctrl_c()) => {
            signal?;
        }
    }

    Ok(())
}
