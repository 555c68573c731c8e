#![warn(clippy::pedantic)]

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use exsync_domain::{ImportReport, ImportService};
use exsync_storage::{PostgREST, ReqwestSendRequest, WgerREST};
use log::{debug, error, info, warn};

use crate::config::{Args, Config};

mod config;
mod logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();

    if let Err(err) = logger::init(args.verbose) {
        eprintln!("failed to initialize logger: {err}");
        return ExitCode::FAILURE;
    }

    match dotenv {
        Ok(path) => debug!("loaded environment from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => warn!("failed to load .env: {err}"),
    }

    exit_code(&run(args).await)
}

/// Failures on single exercises do not fail the run.
fn exit_code(result: &Result<ImportReport>) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("exercise import failed: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<ImportReport> {
    let config = Config::try_from(args)?;

    let client = reqwest::Client::builder()
        .user_agent(concat!("exsync/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("failed to create HTTP client")?;
    let sender = ReqwestSendRequest::new(client);

    let wger = WgerREST::new(
        sender.clone(),
        &config.wger_url,
        config.language_id,
        config.limit,
    )
    .context("invalid WGER configuration")?;
    let postgrest = PostgREST::new(sender, &config.supabase_url, &config.supabase_key)
        .context("invalid Supabase configuration")?;

    debug!("source: {}", wger.url());
    debug!("destination: {}", postgrest.url());
    if config.options.dry_run {
        info!("dry run, the database will not be modified");
    }

    let report = ImportService::new(wger, postgrest)
        .import(&config.options)
        .await
        .context("failed to fetch exercises from WGER")?;

    if report.failed > 0 {
        warn!("{} exercises could not be written", report.failed);
    }

    Ok(report)
}
