use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};

use crate::args::CollectorArgs;
use crate::config::load_config;
use crate::error::AppResult;
use crate::http::{TimedCaller, build_client};
use crate::notify::{AlertSink, LogOnlySink, TelegramNotifier};
use crate::scheduler::Scheduler;
use crate::shutdown::{setup_signal_shutdown_handler, shutdown_channel};
use crate::sinks::RecordsSink;

/// Parses the command line, then runs the collector until shutdown (or for a
/// single cycle with `--once`).
///
/// # Errors
///
/// Returns an error when the config file is invalid, or the HTTP client or
/// runtime cannot be built. Invalid arguments exit through clap.
pub fn run() -> AppResult<()> {
    let args = CollectorArgs::parse();

    crate::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

async fn run_async(args: CollectorArgs) -> AppResult<()> {
    let config = match load_config(&args.config) {
        Ok(config) => config,
        Err(err) => {
            error!("Failed to load {}: {}", args.config.display(), err);
            return Err(err);
        }
    };

    let client = build_client()?;
    let alerts: Arc<dyn AlertSink> = match TelegramNotifier::from_env(client.clone()) {
        Some(notifier) => {
            info!(
                "Alerts go to {} telegram subscriber(s)",
                notifier.subscribers().len()
            );
            Arc::new(notifier)
        }
        None => {
            info!("TGBOT_API_KEY or NOTIFIER_SUBS not set; alerts are logged only");
            Arc::new(LogOnlySink)
        }
    };

    let scheduler = Scheduler::new(TimedCaller::new(client), config, alerts, args.interval)
        .with_average_mode(args.average_over)
        .with_records(args.records.map(RecordsSink::new));

    if args.once {
        scheduler.run_cycle().await;
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);
    scheduler.run(shutdown_rx).await;
    signal_handle.abort();
    Ok(())
}
