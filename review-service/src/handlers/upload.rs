use crate::dtos::UploadResponse;
use crate::startup::AppState;
use axum::{
    Json,
    extract::{Multipart, State},
    response::IntoResponse,
};
use service_core::error::AppError;

pub async fn upload_document(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::BadRequest(anyhow::anyhow!("Failed to read multipart field: {}", e))
    })? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or("unnamed").to_string();
        let data = field.bytes().await.map_err(|e| {
            AppError::BadRequest(anyhow::anyhow!("Failed to read file bytes: {}", e))
        })?;

        tracing::info!(
            filename = %filename,
            size = data.len(),
            "Document upload received"
        );

        let paragraphs = state.extractor.extract(&filename, &data).await?;

        tracing::info!(
            filename = %filename,
            paragraphs = paragraphs.len(),
            "Document extraction completed"
        );

        return Ok(Json(UploadResponse { paragraphs }));
    }

    Err(AppError::BadRequest(anyhow::anyhow!("No file uploaded")))
}
