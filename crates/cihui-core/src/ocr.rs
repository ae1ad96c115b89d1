/// OCR adapter seam: one image in, text lines out in reading order.
///
/// Implementations decode the image themselves so that a bad file surfaces as
/// [`OcrError::Decode`].
pub trait OcrEngine: Send + Sync {
    /// Engine identifier for logs, e.g. "tesseract"
    fn name(&self) -> &str;

    /// Recognize text lines, top to bottom
    fn recognize(&self, image: &[u8]) -> Result<Vec<String>, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("Not a valid image: {0}")]
    Decode(String),

    #[error("OCR engine not available: {0}")]
    Unavailable(String),

    #[error("OCR engine failed: {0}")]
    Engine(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
