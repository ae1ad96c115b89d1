//! Tesseract OCR backend.
//!
//! Runs the `tesseract` command-line tool with the image piped on stdin and
//! the recognized text read back from stdout.

use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::time::Instant;

use cihui_config::ocr::OcrConfig;
use cihui_core::{OcrEngine, OcrError};
use image::DynamicImage;

use crate::decode::{decode_image, encode_png};

pub struct TesseractEngine {
    binary: String,
    languages: String,
    page_segmentation: u8,
    version: String,
}

impl TesseractEngine {
    /// Probe the binary and build an engine
    pub fn new(binary: &str, languages: &str, page_segmentation: u8) -> Result<Self, OcrError> {
        let output = Command::new(binary)
            .arg("--version")
            .output()
            .map_err(|e| not_found_or_io(binary, e))?;

        if !output.status.success() {
            return Err(OcrError::Unavailable(format!(
                "`{binary} --version` exited with {}",
                output.status
            )));
        }

        // Older releases print the banner on stderr
        let version = String::from_utf8_lossy(&output.stdout)
            .lines()
            .chain(String::from_utf8_lossy(&output.stderr).lines())
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or("tesseract")
            .to_string();

        Ok(Self {
            binary: binary.to_string(),
            languages: languages.to_string(),
            page_segmentation,
            version,
        })
    }

    pub fn from_config(config: &OcrConfig) -> Result<Self, OcrError> {
        Self::new(&config.binary, &config.languages, config.page_segmentation)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn languages(&self) -> &str {
        &self.languages
    }

    /// Recognize an already decoded image
    pub fn recognize_decoded(&self, decoded: &DynamicImage) -> Result<Vec<String>, OcrError> {
        let start = Instant::now();
        let grayscale = DynamicImage::ImageLuma8(decoded.to_luma8());
        let text = self.run_tesseract(&encode_png(&grayscale)?)?;
        let lines = parse_lines(&text);

        tracing::debug!(
            "tesseract: {} lines in {:?} ({}x{})",
            lines.len(),
            start.elapsed(),
            decoded.width(),
            decoded.height()
        );
        Ok(lines)
    }

    fn run_tesseract(&self, png: &[u8]) -> Result<String, OcrError> {
        let mut child = Command::new(&self.binary)
            .args(["stdin", "stdout", "-l", &self.languages])
            .args(["--psm", &self.page_segmentation.to_string()])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| not_found_or_io(&self.binary, e))?;

        // Tesseract reads the whole image before writing anything. It can exit
        // early (missing language data) and close the pipe; its exit status
        // takes precedence over the write error.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(png),
            None => Ok(()),
        };

        let output = child.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Engine(format!(
                "tesseract exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        written?;

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl OcrEngine for TesseractEngine {
    fn name(&self) -> &str {
        "tesseract"
    }

    fn recognize(&self, image: &[u8]) -> Result<Vec<String>, OcrError> {
        self.recognize_decoded(&decode_image(image)?)
    }
}

/// Split tesseract output into trimmed, non-empty lines in reading order
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn not_found_or_io(binary: &str, e: std::io::Error) -> OcrError {
    if e.kind() == ErrorKind::NotFound {
        OcrError::Unavailable(format!("{binary} not found (install tesseract-ocr)"))
    } else {
        OcrError::Io(e)
    }
}
