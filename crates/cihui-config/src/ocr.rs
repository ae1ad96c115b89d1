use cihui_types::FailurePolicy;
use serde::{Deserialize, Serialize};

fn default_binary() -> String {
    "tesseract".to_string()
}

fn default_languages() -> String {
    "eng+chi_sim".to_string()
}

fn default_page_segmentation() -> u8 {
    6
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract executable, looked up on PATH when not absolute
    #[serde(default = "default_binary")]
    pub binary: String,
    /// Tesseract language list, e.g. "eng+chi_sim"
    #[serde(default = "default_languages")]
    pub languages: String,
    /// Tesseract --psm value
    #[serde(default = "default_page_segmentation")]
    pub page_segmentation: u8,
    #[serde(default)]
    pub on_image_error: FailurePolicy,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            languages: default_languages(),
            page_segmentation: default_page_segmentation(),
            on_image_error: FailurePolicy::default(),
        }
    }
}
