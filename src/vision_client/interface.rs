#[derive(Debug, thiserror::Error)]
pub enum VisionError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("{0}")]
    Protocol(String),
}

/// A remote multimodal model that answers free-text questions about one frame.
///
/// Implementations return the model's raw text; parsing and validation belong
/// to the gates.
pub trait VisionClient: Send + Sync {
    fn query_quality(&self, frame: &[u8]) -> Result<String, VisionError>;
    fn query_classification(&self, frame: &[u8], region: &str) -> Result<String, VisionError>;
}
