use std::sync::Arc;

use anyhow::Context;
use cihui_core::BatchReport;
use cihui_types::ImageInput;

use crate::state::AppState;

/// Run the whole batch on the blocking pool and wait for it to finish
pub async fn process_batch(
    state: Arc<AppState>,
    images: Vec<ImageInput>,
) -> anyhow::Result<BatchReport> {
    let count = images.len();
    tracing::info!("Processing {} image(s)", count);

    let report = tokio::task::spawn_blocking(move || state.pipeline().run(&images))
        .await
        .context("Batch task panicked")??;

    tracing::info!(
        "Batch finished: {} image(s), {} record(s), {} skipped",
        count,
        report.outcome.records().len(),
        report.failures.len()
    );
    Ok(report)
}
