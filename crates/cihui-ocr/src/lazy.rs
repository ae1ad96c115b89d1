use std::sync::OnceLock;

use cihui_config::ocr::OcrConfig;
use cihui_core::{OcrEngine, OcrError};

use crate::decode::decode_image;
use crate::tesseract::TesseractEngine;

/// Process-wide OCR engine handle.
///
/// The engine is built on the first `recognize` call and reused for every
/// later image. A run that never recognizes anything never probes tesseract.
pub struct LazyTesseract {
    config: OcrConfig,
    engine: OnceLock<TesseractEngine>,
}

impl LazyTesseract {
    pub fn new(config: OcrConfig) -> Self {
        Self {
            config,
            engine: OnceLock::new(),
        }
    }

    pub fn get(&self) -> Result<&TesseractEngine, OcrError> {
        if let Some(engine) = self.engine.get() {
            return Ok(engine);
        }

        let engine = TesseractEngine::from_config(&self.config)?;
        tracing::info!(
            "OCR engine ready: {} (languages: {})",
            engine.version(),
            engine.languages()
        );
        Ok(self.engine.get_or_init(|| engine))
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.get().is_some()
    }
}

impl OcrEngine for LazyTesseract {
    fn name(&self) -> &str {
        "tesseract"
    }

    /// Undecodable input is reported as such even when tesseract is missing
    fn recognize(&self, image: &[u8]) -> Result<Vec<String>, OcrError> {
        let decoded = decode_image(image)?;
        self.get()?.recognize_decoded(&decoded)
    }
}
