use async_trait::async_trait;
use service_core::error::AppError;

/// Converts an uploaded document into its paragraphs, in document order.
///
/// Format-specific parsing lives behind this seam; the service only depends
/// on the ordered paragraph list that comes back. An unreadable document is
/// an `ExtractionError`, surfaced to the client as a generic 4xx.
#[async_trait]
pub trait Extractor: Send + Sync {
    async fn extract(&self, filename: &str, data: &[u8]) -> Result<Vec<String>, AppError>;
}

/// Plain-text extractor: paragraphs are blank-line separated blocks.
#[derive(Default)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Extractor for TextExtractor {
    async fn extract(&self, filename: &str, data: &[u8]) -> Result<Vec<String>, AppError> {
        let text = std::str::from_utf8(data).map_err(|e| {
            AppError::ExtractionError(anyhow::anyhow!("{} is not valid UTF-8: {}", filename, e))
        })?;

        let normalized = text.replace("\r\n", "\n");
        let paragraphs = normalized
            .split("\n\n")
            .map(|block| block.trim())
            .filter(|block| !block.is_empty())
            .map(|block| block.to_string())
            .collect();

        Ok(paragraphs)
    }
}
