use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use cihui_core::{BatchOutcome, BatchReport};
use cihui_export::{DocxExporter, HandoutTemplate, render_table, save_json};

pub const NO_VOCABULARY_WARNING: &str = "未能识别到词汇，请确认截图中是否包含英文单词和释义。";

/// Where and how the run's results are shown
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub document: PathBuf,
    pub json: Option<PathBuf>,
    pub preview: bool,
    pub max_cell_width: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Delivery {
    Exported { records: usize, document: PathBuf },
    NothingFound,
}

/// Preview and export a finished batch
pub fn deliver(
    report: &BatchReport,
    template: HandoutTemplate,
    options: &OutputOptions,
) -> anyhow::Result<Delivery> {
    for failure in &report.failures {
        tracing::warn!("Skipped {}: {}", failure.name, failure.error);
    }

    match &report.outcome {
        BatchOutcome::NoVocabularyFound => {
            tracing::warn!(
                "No vocabulary pairs recognized in {} image(s)",
                report.images.len() + report.failures.len()
            );
            eprintln!("{NO_VOCABULARY_WARNING}");
            return Ok(Delivery::NothingFound);
        }
        BatchOutcome::Fallback(_) => {
            tracing::info!("No images supplied, exporting the sample record");
        }
        BatchOutcome::Extracted(_) => {}
    }

    let records = report.outcome.records();

    if options.preview {
        println!("{}", render_table(records, options.max_cell_width));
    }
    println!("共提取到 {} 个词汇", records.len());

    ensure_parent(&options.document)?;
    DocxExporter::new(template)
        .save(records, &options.document)
        .with_context(|| format!("Failed to write {}", options.document.display()))?;
    println!("{}", options.document.display());

    if let Some(json) = &options.json {
        ensure_parent(json)?;
        save_json(records, json).with_context(|| format!("Failed to write {}", json.display()))?;
    }

    Ok(Delivery::Exported {
        records: records.len(),
        document: options.document.clone(),
    })
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display())),
        _ => Ok(()),
    }
}
