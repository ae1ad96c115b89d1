use cihui_config::Config;
use cihui_core::{Lexicon, OcrEngine, Pipeline};
use cihui_lang_english::{EnglishLexicon, EnglishLexiconLoader};
use cihui_ocr::LazyTesseract;

/// Process-scoped resources for one run
pub struct AppState {
    pub config: Config,
    pub lexicon: EnglishLexicon,
    pub ocr_engine: Box<dyn OcrEngine>,
}

impl AppState {
    /// Lexicon loaded now, tesseract probed on first use
    pub fn new(config: Config) -> Self {
        let lexicon = load_lexicon(&config);
        let ocr_engine = Box::new(LazyTesseract::new(config.ocr.clone()));
        Self::with_engine(config, lexicon, ocr_engine)
    }

    pub fn with_engine(
        config: Config,
        lexicon: EnglishLexicon,
        ocr_engine: Box<dyn OcrEngine>,
    ) -> Self {
        Self {
            config,
            lexicon,
            ocr_engine,
        }
    }

    pub fn pipeline(&self) -> Pipeline<'_> {
        Pipeline::new(self.ocr_engine.as_ref(), &self.lexicon)
            .with_policy(self.config.ocr.on_image_error)
    }
}

fn load_lexicon(config: &Config) -> EnglishLexicon {
    let lexicon = if config.lexicon.enabled {
        EnglishLexiconLoader::load_with_additional(&config.lexicon.additional_paths)
    } else {
        tracing::warn!("Additional lexicons disabled, using embedded entries only");
        EnglishLexiconLoader::load_with_additional::<&str>(&[])
    };
    tracing::info!("Lexicon ready with {} entries", lexicon.entry_count());
    lexicon
}
