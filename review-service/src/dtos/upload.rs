use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub paragraphs: Vec<String>,
}
