mod config;
mod document;
mod emoji;
mod error;
mod gist;
mod ranking;
mod render;
mod runner;
mod splice;
mod steam;
mod table;
mod width;

use std::path::Path;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use config::{Cli, Config, Credentials};
use error::{AppError, render_error_message};
use gist::GistClient;
use runner::SteamBox;
use steam::SteamClient;

static TRACING_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
static TRACING_INIT: OnceLock<()> = OnceLock::new();

fn init_logging(log_dir: Option<&Path>) {
    TRACING_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

        let file_layer = log_dir.and_then(|dir| {
            if let Err(err) = std::fs::create_dir_all(dir) {
                eprintln!("failed to create log directory {}: {err}", dir.display());
                return None;
            }
            let file_appender = tracing_appender::rolling::daily(dir, "steambox.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = TRACING_GUARD.set(guard);
            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        });

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    });
}

fn run(config: Config, credentials: Credentials) -> Result<(), AppError> {
    let library = SteamClient::new(credentials.steam_api_key, credentials.http_timeout)
        .map_err(|err| AppError::provider("steam client setup", err))?;
    let sink = if config.target.includes_paste() {
        let client = GistClient::new(
            &credentials.gh_user,
            &credentials.gh_token,
            credentials.http_timeout,
        )
        .map_err(|err| AppError::provider("github client setup", err))?;
        Some(client)
    } else {
        None
    };

    let summary = SteamBox::new(library, sink).run(&config)?;
    tracing::info!(
        title = %summary.title,
        gist_updated = summary.gist_updated,
        documents_updated = summary.documents_updated.len(),
        "run finished"
    );

    if !summary.document_errors.is_empty() {
        return Err(AppError::Documents {
            failed: summary.document_errors.len(),
            total: summary.document_errors.len() + summary.documents_updated.len(),
        });
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_dir.as_deref());

    let result = cli
        .into_parts()
        .map_err(AppError::from)
        .and_then(|(config, credentials)| run(config, credentials));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = render_error_message(&err);
            tracing::error!(error = %message, "steambox failed");
            ExitCode::FAILURE
        }
    }
}
