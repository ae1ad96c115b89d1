use crate::ocr::OcrError;

/// Fatal batch errors, each naming the image that caused it
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("{image}: {source}")]
    Decode {
        image: String,
        #[source]
        source: OcrError,
    },

    #[error("{image}: {source}")]
    Recognition {
        image: String,
        #[source]
        source: OcrError,
    },
}

impl PipelineError {
    pub fn from_ocr(image: &str, source: OcrError) -> Self {
        let image = image.to_string();
        match source {
            OcrError::Decode(_) => PipelineError::Decode { image, source },
            other => PipelineError::Recognition {
                image,
                source: other,
            },
        }
    }

    pub fn image(&self) -> &str {
        match self {
            PipelineError::Decode { image, .. } | PipelineError::Recognition { image, .. } => image,
        }
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, PipelineError::Decode { .. })
    }
}
