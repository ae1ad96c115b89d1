use std::env;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use self::export::ExportConfig;
use self::lexicon::LexiconConfig;
use self::ocr::OcrConfig;
use self::ui::UiConfig;

pub mod export;
pub mod lexicon;
pub mod ocr;
pub mod ui;

pub const ENV_TESSERACT: &str = "CIHUI_TESSERACT";
pub const ENV_OCR_LANGUAGES: &str = "CIHUI_OCR_LANGUAGES";
pub const ENV_OUTPUT_DIR: &str = "CIHUI_OUTPUT_DIR";

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub ocr: OcrConfig,
    pub lexicon: LexiconConfig,
    pub export: ExportConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env();
        config
    }

    /// Load a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        tracing::info!("Loading config from {}", path.display());
        let data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::from_json(&data)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        config.apply_env();
        Ok(config)
    }

    pub fn from_json(data: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply overrides from any key lookup; empty values are ignored
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(binary) = lookup(ENV_TESSERACT) {
            self.ocr.binary = binary;
        }
        if let Some(languages) = lookup(ENV_OCR_LANGUAGES) {
            self.ocr.languages = languages;
        }
        if let Some(output_dir) = lookup(ENV_OUTPUT_DIR) {
            self.export.output_dir = output_dir;
        }
    }
}
