use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use cihui_types::ImageInput;

pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Read every screenshot up front; any unreadable or unsupported file stops the run
pub fn read_images(paths: &[PathBuf]) -> anyhow::Result<Vec<ImageInput>> {
    let mut images = Vec::with_capacity(paths.len());

    for path in paths {
        if !is_supported(path) {
            bail!(
                "Unsupported file {} (expected one of: {})",
                path.display(),
                SUPPORTED_EXTENSIONS.join(", ")
            );
        }

        let bytes =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        tracing::debug!("Read {} ({} bytes)", name, bytes.len());
        images.push(ImageInput::new(name, bytes));
    }

    Ok(images)
}
