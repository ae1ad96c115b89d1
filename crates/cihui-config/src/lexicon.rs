use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LexiconConfig {
    /// When false only the embedded entries are used
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Extra lexicon JSON files merged over the embedded data, in order
    #[serde(default)]
    pub additional_paths: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            additional_paths: vec![],
        }
    }
}
