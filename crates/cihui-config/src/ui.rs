use serde::{Deserialize, Serialize};

fn default_max_cell_width() -> usize {
    24
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Preview cells wider than this (in terminal columns) are truncated
    #[serde(default = "default_max_cell_width")]
    pub max_cell_width: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_cell_width: default_max_cell_width(),
        }
    }
}
