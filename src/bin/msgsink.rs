use std::error::Error;

use msgsink::cli::{CliArgs, SinkArgs};
use msgsink::{AppConfig, LoadSignal, build_app_from_config, logging};
use sarge::prelude::*;

fn print_usage() {
    eprintln!("Usage:");
    eprintln!(
        "  msgsink [--config <path>] [--message <text>] [--target <id>] [--sink <token> ...] [--log-level <level>]"
    );
    eprintln!();
    eprintln!("Sink tokens:");
    eprintln!("  <id>                  Stdout sink addressed by <id>");
    eprintln!("  <id>=stdout|stderr    Standard stream sink");
    eprintln!("  <id>=file:<path>      File sink, truncated on every write");
    eprintln!("  <id>=memory           In-memory sink (discarded on exit)");
}

fn value_of<T, E>(value: Option<Result<T, E>>) -> Option<T> {
    value.and_then(Result::ok)
}

fn parse_args() -> Result<CliArgs, Box<dyn Error>> {
    let mut reader = ArgumentReader::new();

    let config_ref = reader.add::<String>(tag::both('c', "config"));
    let message_ref = reader.add::<String>(tag::both('m', "message"));
    let target_ref = reader.add::<String>(tag::both('t', "target"));
    let sink_ref = reader.add::<SinkArgs>(tag::both('s', "sink"));
    let level_ref = reader.add::<String>(tag::long("log-level"));

    let args = reader.parse()?;

    let sinks = match sink_ref.get(&args) {
        Some(Ok(v)) => v,
        Some(Err(never)) => match never {},
        None => SinkArgs::default(),
    };

    Ok(CliArgs {
        config: value_of(config_ref.get(&args)),
        message: value_of(message_ref.get(&args)),
        target: value_of(target_ref.get(&args)),
        log_level: value_of(level_ref.get(&args)),
        sinks,
    })
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = parse_args()?;

    let base = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    let config = cli.apply_to(base);

    logging::init(&config.log_level)?;
    tracing::debug!(target_id = %config.target, sinks = config.sinks.len(), "config resolved");

    let app = std::sync::Arc::new(build_app_from_config(&config)?);

    let mut signal = LoadSignal::new();
    app.register(&mut signal);
    signal.fire();

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("msgsink error: {e}");
        print_usage();
        std::process::exit(1);
    }
}
