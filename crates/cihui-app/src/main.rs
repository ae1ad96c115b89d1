use std::sync::Arc;

use clap::Parser;
use cihui_export::HandoutTemplate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod batch;
mod cli;
mod io;
mod report;
mod settings;
mod state;

use self::batch::process_batch;
use self::cli::Cli;
use self::report::{OutputOptions, deliver};
use self::state::AppState;

const LOG_TARGETS: [&str; 6] = [
    "cihui",
    "cihui_core",
    "cihui_ocr",
    "cihui_export",
    "cihui_config",
    "cihui_lang_english",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(cli).await
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let default_filter = std::iter::once("warn".to_string())
        .chain(LOG_TARGETS.iter().map(|target| format!("{target}={level}")))
        .collect::<Vec<_>>()
        .join(",");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = settings::load_config(cli.config.as_deref())?;

    let options = OutputOptions {
        document: cli
            .output
            .clone()
            .unwrap_or_else(|| config.export.output_path()),
        json: cli.json.clone(),
        preview: !cli.no_preview,
        max_cell_width: config.ui.max_cell_width,
    };
    let template = HandoutTemplate::default_chinese().with_title(config.export.title.clone());

    let images = io::read_images(&cli.images)?;
    let state = Arc::new(AppState::new(config));

    let report = process_batch(state, images).await?;
    deliver(&report, template, &options)?;

    Ok(())
}
