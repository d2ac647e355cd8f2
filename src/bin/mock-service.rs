//! Stand-in for a monitored service.
//!
//! Serves `GET /health`, answering 200, 400 or 500 at random so every branch
//! of the prober can be exercised locally:
//!
//! ```text
//! cargo run --bin mock-service -- --port 3000
//! ```

use axum::{http::StatusCode, routing::get, Json, Router};
use clap::Parser;
use rand::seq::SliceRandom;
use serde_json::{json, Value};
use std::net::SocketAddr;

#[derive(Parser)]
#[command(name = "mock-service")]
#[command(about = "Demo service with a flaky /health endpoint", long_about = None)]
struct Cli {
    #[arg(short, long, env = "PORT", default_value_t = 3000)]
    port: u16,
}

const OUTCOMES: [(StatusCode, &str); 3] = [
    (StatusCode::OK, "API is healthy."),
    (StatusCode::BAD_REQUEST, "Invalid request (simulated)."),
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error (simulated)."),
];

async fn health() -> (StatusCode, Json<Value>) {
    let (status, message) = *OUTCOMES
        .choose(&mut rand::thread_rng())
        .unwrap_or(&OUTCOMES[0]);

    tracing::info!(status = status.as_u16(), "GET /health");
    (
        status,
        Json(json!({ "status": status.as_u16(), "message": message })),
    )
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mock_service=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let app = Router::new().route("/health", get(health));

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    tracing::info!(address = %addr, "mock-service listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
