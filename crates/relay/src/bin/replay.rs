//! Replays a saved SNS event through the relay.
//!
//! Run with: cargo run --bin relay-replay -- --event event.json --dry-run

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cloudwatch_mackerel_relay::{
    logging, AlarmRelay, Config, MackerelSink, ReportSink, SnsEnvelope, StdoutSink, Translator,
};

#[derive(Parser)]
#[command(author, version, about = "Replay an SNS alarm event through the Mackerel relay", long_about = None)]
struct Cli {
    /// SNS event JSON file (reads stdin when omitted)
    #[arg(short, long)]
    event: Option<PathBuf>,

    /// Print the check reports instead of posting them to Mackerel
    #[arg(long)]
    dry_run: bool,

    /// Pretty-print dry-run output
    #[arg(long, requires = "dry_run")]
    pretty: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn read_event(path: Option<&PathBuf>) -> Result<SnsEnvelope> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read event from stdin")?;
            raw
        }
    };
    serde_json::from_str(&raw).context("event is not a valid SNS event")
}

async fn replay<S: ReportSink>(relay: AlarmRelay<S>, envelope: SnsEnvelope) -> Result<()> {
    info!(sink = relay.sink().name(), records = envelope.len(), "replaying SNS event");
    relay.handle(envelope).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_cli(&cli.log_level);

    let envelope = read_event(cli.event.as_ref())?;

    if cli.dry_run {
        let config = Config::load_dry_run()?;
        let relay = AlarmRelay::new(Translator::new(config.host_id), StdoutSink::new(cli.pretty));
        replay(relay, envelope).await
    } else {
        let config = Config::load()?;
        let sink = MackerelSink::new(&config.mackerel)?;
        let relay = AlarmRelay::new(Translator::new(config.host_id), sink);
        replay(relay, envelope).await?;
        info!("check reports posted");
        Ok(())
    }
}
