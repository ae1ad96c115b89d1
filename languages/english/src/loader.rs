use std::path::Path;

use cihui_core::Lexicon;

use crate::lexicon::{EnglishLexicon, LoadError};

pub struct EnglishLexiconLoader;

impl EnglishLexiconLoader {
    /// Load the lexicon compiled into the binary
    pub fn load_embedded() -> Result<EnglishLexicon, LoadError> {
        let json = include_str!("../data/lexicon.json");
        tracing::debug!("Loading embedded lexicon...");
        let lexicon = EnglishLexicon::from_json(json)?;
        tracing::info!("Loaded {} embedded lexicon entries", lexicon.entry_count());
        Ok(lexicon)
    }

    /// Load a lexicon from a JSON file
    pub fn load_from_file(path: &Path) -> Result<EnglishLexicon, LoadError> {
        tracing::info!("Loading lexicon from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        let lexicon = EnglishLexicon::from_json(&json)?;
        tracing::info!(
            "Loaded {} lexicon entries from {}",
            lexicon.entry_count(),
            path.display()
        );
        Ok(lexicon)
    }

    /// Embedded entries, then each additional file merged on top in order.
    ///
    /// A file that cannot be loaded is logged and skipped.
    pub fn load_with_additional<P: AsRef<Path>>(additional_paths: &[P]) -> EnglishLexicon {
        let mut lexicon = Self::load_embedded().unwrap_or_else(|e| {
            tracing::error!("Failed to load embedded lexicon: {}", e);
            tracing::warn!("Starting with empty lexicon");
            EnglishLexicon::new()
        });

        for path in additional_paths {
            let path = path.as_ref();
            match Self::load_from_file(path) {
                Ok(additional) => {
                    tracing::info!("Merging lexicon {} from {}", additional.name(), path.display());
                    lexicon = lexicon.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load lexicon from {}: {}", path.display(), e);
                }
            }
        }

        lexicon
    }
}
