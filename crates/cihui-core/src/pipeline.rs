use cihui_types::{FailurePolicy, ImageInput};

use crate::aggregate::{BatchOutcome, RecordAggregator};
use crate::error::PipelineError;
use crate::extract::extract_pairs;
use crate::lookup::Lexicon;
use crate::ocr::OcrEngine;

/// Per-image counters for the run report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    pub name: String,
    pub lines: usize,
    pub pairs: usize,
}

/// An image dropped under [`FailurePolicy::Skip`]
#[derive(Debug)]
pub struct ImageFailure {
    pub name: String,
    pub error: PipelineError,
}

#[derive(Debug)]
pub struct BatchReport {
    pub outcome: BatchOutcome,
    pub images: Vec<ImageSummary>,
    pub failures: Vec<ImageFailure>,
}

/// Image batch → vocabulary records
///
/// Images are recognized one after another in the order given. Both
/// collaborators are borrowed so the caller owns their lifetime.
pub struct Pipeline<'a> {
    ocr: &'a dyn OcrEngine,
    lexicon: &'a dyn Lexicon,
    policy: FailurePolicy,
}

impl<'a> Pipeline<'a> {
    pub fn new(ocr: &'a dyn OcrEngine, lexicon: &'a dyn Lexicon) -> Self {
        Self {
            ocr,
            lexicon,
            policy: FailurePolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn run(&self, images: &[ImageInput]) -> Result<BatchReport, PipelineError> {
        let mut aggregator = RecordAggregator::new(self.lexicon);
        let mut summaries = Vec::with_capacity(images.len());
        let mut failures = Vec::new();

        for (index, image) in images.iter().enumerate() {
            tracing::info!(
                "Recognizing {} ({}/{}) with {}",
                image.name,
                index + 1,
                images.len(),
                self.ocr.name()
            );

            let lines = match self.ocr.recognize(&image.bytes) {
                Ok(lines) => lines,
                Err(e) => {
                    let error = PipelineError::from_ocr(&image.name, e);
                    match self.policy {
                        FailurePolicy::Abort => {
                            tracing::error!("OCR failed, aborting batch: {}", error);
                            return Err(error);
                        }
                        FailurePolicy::Skip => {
                            tracing::warn!("Skipping image: {}", error);
                            aggregator.mark_image_seen();
                            failures.push(ImageFailure {
                                name: image.name.clone(),
                                error,
                            });
                            continue;
                        }
                    }
                }
            };

            tracing::debug!("{}: recognized {} lines", image.name, lines.len());
            for line in &lines {
                tracing::debug!("  > {}", line);
            }

            let pairs = extract_pairs(&lines);
            let added = aggregator.push_image(&pairs);
            tracing::info!("{}: {} vocabulary pairs", image.name, added);

            summaries.push(ImageSummary {
                name: image.name.clone(),
                lines: lines.len(),
                pairs: added,
            });
        }

        Ok(BatchReport {
            outcome: aggregator.finish(),
            images: summaries,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::lookup::tests::violate_lexicon;
    use crate::ocr::OcrError;

    /// Treats the image bytes as newline-separated OCR output; non-UTF-8 fails decoding
    #[derive(Default)]
    struct ScriptedOcr {
        calls: AtomicUsize,
    }

    impl OcrEngine for ScriptedOcr {
        fn name(&self) -> &str {
            "scripted"
        }

        fn recognize(&self, image: &[u8]) -> Result<Vec<String>, OcrError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let text = std::str::from_utf8(image)
                .map_err(|e| OcrError::Decode(e.to_string()))?;
            Ok(text.lines().map(str::to_string).collect())
        }
    }

    fn image(name: &str, lines: &[&str]) -> ImageInput {
        ImageInput::new(name, lines.join("\n").into_bytes())
    }

    fn garbage(name: &str) -> ImageInput {
        ImageInput::new(name, vec![0xff, 0xfe, 0x00, 0x9f])
    }

    fn words(outcome: &BatchOutcome) -> Vec<(String, String)> {
        outcome
            .records()
            .iter()
            .map(|r| (r.word().to_string(), r.meaning().to_string()))
            .collect()
    }

    #[test]
    fn test_zero_images_uses_fallback_without_ocr() {
        let ocr = ScriptedOcr::default();
        let lexicon = violate_lexicon();

        let report = Pipeline::new(&ocr, &lexicon).run(&[]).unwrap();

        assert_eq!(ocr.calls.load(Ordering::SeqCst), 0);
        let records = report.outcome.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].word(), "violate");
        assert_eq!(records[0].meaning(), "违反");
        assert_eq!(records[0].part_of_speech(), "v.");
    }

    #[test]
    fn test_single_image_drops_trailing_word() {
        let ocr = ScriptedOcr::default();
        let lexicon = violate_lexicon();

        let report = Pipeline::new(&ocr, &lexicon)
            .run(&[image("list.png", &["cat", "猫", "dog"])])
            .unwrap();

        assert_eq!(words(&report.outcome), vec![("cat".to_string(), "猫".to_string())]);
        assert_eq!(
            report.images,
            vec![ImageSummary {
                name: "list.png".to_string(),
                lines: 3,
                pairs: 1,
            }]
        );
    }

    #[test]
    fn test_two_images_keep_order_and_duplicates() {
        let ocr = ScriptedOcr::default();
        let lexicon = violate_lexicon();

        let report = Pipeline::new(&ocr, &lexicon)
            .run(&[
                image("a.png", &["cat", "猫"]),
                image("b.png", &["cat", "猫"]),
            ])
            .unwrap();

        assert_eq!(
            words(&report.outcome),
            vec![
                ("cat".to_string(), "猫".to_string()),
                ("cat".to_string(), "猫".to_string()),
            ]
        );
    }

    #[test]
    fn test_images_without_pairs() {
        let ocr = ScriptedOcr::default();
        let lexicon = violate_lexicon();

        let report = Pipeline::new(&ocr, &lexicon)
            .run(&[image("noise.png", &["hello", "world", "123"])])
            .unwrap();

        assert_eq!(report.outcome, BatchOutcome::NoVocabularyFound);
    }

    #[test]
    fn test_decode_error_aborts_by_default() {
        let ocr = ScriptedOcr::default();
        let lexicon = violate_lexicon();

        let err = Pipeline::new(&ocr, &lexicon)
            .run(&[
                image("a.png", &["cat", "猫"]),
                garbage("broken.png"),
                image("c.png", &["dog", "狗"]),
            ])
            .unwrap_err();

        assert!(err.is_decode());
        assert_eq!(err.image(), "broken.png");
        assert_eq!(ocr.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_skip_policy_isolates_failures() {
        let ocr = ScriptedOcr::default();
        let lexicon = violate_lexicon();

        let report = Pipeline::new(&ocr, &lexicon)
            .with_policy(FailurePolicy::Skip)
            .run(&[
                image("a.png", &["cat", "猫"]),
                garbage("broken.png"),
                image("c.png", &["dog", "狗"]),
            ])
            .unwrap();

        assert_eq!(
            words(&report.outcome),
            vec![
                ("cat".to_string(), "猫".to_string()),
                ("dog".to_string(), "狗".to_string()),
            ]
        );
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].name, "broken.png");
    }

    #[test]
    fn test_skip_policy_all_failed_is_not_fallback() {
        let ocr = ScriptedOcr::default();
        let lexicon = violate_lexicon();

        let report = Pipeline::new(&ocr, &lexicon)
            .with_policy(FailurePolicy::Skip)
            .run(&[garbage("broken.png")])
            .unwrap();

        assert_eq!(report.outcome, BatchOutcome::NoVocabularyFound);
    }
}
