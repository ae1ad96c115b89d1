use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_file_name() -> String {
    "词汇扩展结果.docx".to_string()
}

fn default_title() -> String {
    "高三英语常忘词扩展记忆手册".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Level-1 heading at the top of the handout
    #[serde(default = "default_title")]
    pub title: String,
}

impl ExportConfig {
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output_dir).join(&self.file_name)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            file_name: default_file_name(),
            title: default_title(),
        }
    }
}
