//! rhid-unlock - fetch the unlock code for a tamper-locked RHID device.
//!
//! Logs into RHID with `EMAIL`/`PASSWORD` (from the environment or a `.env`
//! file), then requests the unlock code for the device given on the command
//! line and prints the service's reply.

mod args;

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use args::Invocation;
use rhid_core::{Config, UnlockRequest, UnlockResponse};

const USAGE: &str = "Usage: rhid-unlock --serial=<serial> --senha=<senha>";

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let request = match args::parse(std::env::args_os().skip(1)) {
        Ok(Invocation::Help) => {
            println!("{}", USAGE);
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Unlock(request)) => request,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match unlock(&request).await {
        Ok(response) => {
            println!("{}", response);
            println!("\nScript finished successfully!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            eprintln!("\nScript failed to complete.");
            ExitCode::FAILURE
        }
    }
}

async fn unlock(request: &UnlockRequest) -> Result<UnlockResponse> {
    let config = Config::from_env();
    info!(base_url = config.base_url(), serial = %request.serial, "rhid-unlock starting");

    rhid_core::run(&config, request)
        .await
        .with_context(|| format!("Unlock failed for serial {}", request.serial))
}
