pub mod aggregate;
pub mod classify;
pub mod error;
pub mod extract;
pub mod lookup;
pub mod ocr;
pub mod pipeline;

pub use aggregate::{BatchOutcome, RecordAggregator};
pub use error::PipelineError;
pub use lookup::{Lexicon, enrich};
pub use ocr::{OcrEngine, OcrError};
pub use pipeline::{BatchReport, ImageFailure, ImageSummary, Pipeline};
