//! Scheduled HTTP health check.
//!
//! Probes each configured endpoint once and publishes an alert to the
//! configured SNS topic for every endpoint that is not healthy. Meant to be
//! started by an external scheduler; each process start is one invocation.
//!
//! ```text
//!   scheduler ──▶ health-check ──GET──▶ endpoint 1 .. n
//!                      │
//!                      └── on failure ──▶ SNS topic ──▶ subscribers
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use serde_json::Value;

use health_check::config::load_config;
use health_check::health::{Endpoint, HealthProber};
use health_check::lifecycle::{handle, InvocationContext};
use health_check::notify::{LogPublisher, Notifier, Publisher, SnsPublisher};
use health_check::observability::init_logging;
use health_check::Error;

#[derive(Parser)]
#[command(name = "health-check")]
#[command(about = "Probe HTTP health endpoints and alert on failures", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "HEALTH_CHECK_CONFIG", default_value = "health-check.toml")]
    config: PathBuf,

    /// JSON event payload from the scheduler.
    #[arg(short, long)]
    event: Option<PathBuf>,

    /// Log alerts instead of publishing them.
    #[arg(long)]
    dry_run: bool,
}

// A single-threaded runtime keeps probes strictly sequential.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    init_logging(&config.logging);

    tracing::info!(
        config = %cli.config.display(),
        endpoints = config.endpoints.len(),
        topic_arn = %config.notifier.topic_arn,
        dry_run = cli.dry_run,
        "health-check v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let event = match &cli.event {
        Some(path) => read_event(path)?,
        None => Value::Null,
    };

    let publisher: Arc<dyn Publisher> = if cli.dry_run {
        Arc::new(LogPublisher::new(config.notifier.topic_arn.clone()))
    } else {
        Arc::new(SnsPublisher::from_config(&config.notifier).await)
    };

    let endpoints = config.endpoints.into_iter().map(Endpoint::from).collect();
    let prober = HealthProber::new(endpoints, Notifier::new(publisher))?;

    if let Err(e) = handle(&event, &InvocationContext::new(), &prober).await {
        tracing::error!(error = %e, "Invocation aborted");
        return Err(e);
    }

    Ok(())
}

fn read_event(path: &std::path::Path) -> Result<Value, Error> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::Event(format!("{}: {e}", path.display())))?;
    serde_json::from_str(&content).map_err(|e| Error::Event(format!("{}: {e}", path.display())))
}
