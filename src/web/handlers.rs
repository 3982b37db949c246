use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, State,
    },
    response::{Html, IntoResponse, Json, Response},
};
use image::{DynamicImage, ImageFormat};
use serde::Serialize;
use serde_json::json;

use super::{page, AppState};
use crate::diagnosis::DiagnosisResult;
use crate::error::InputError;

const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const ACCEPTED_CONTENT_TYPES: [&str; 3] = ["image/jpeg", "image/jpg", "image/png"];

#[derive(Serialize)]
pub struct DiagnoseResponse {
    outcome: &'static str,
    text: String,
    model: String,
    processing_time_ms: u128,
}

#[derive(Serialize)]
pub struct ProbeResponse {
    message: String,
}

impl IntoResponse for InputError {
    fn into_response(self) -> Response {
        tracing::info!(error = %self, "rejected upload");
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn upload_error(error: MultipartError) -> InputError {
    InputError::Upload {
        status: error.status(),
        message: error.body_text(),
    }
}

pub async fn index() -> Html<&'static str> {
    Html(page::INDEX_HTML)
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "model": state.model.model_id() }))
}

pub async fn diagnose(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<DiagnoseResponse>, InputError> {
    let start = Instant::now();

    let multipart = multipart.map_err(|rejection| InputError::Upload {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;
    let image = read_upload(multipart).await?;

    let result = state.diagnoser.diagnose(&image).await;
    let outcome = if result.is_success() { "success" } else { "failure" };
    let text = match result {
        DiagnosisResult::Success(text) | DiagnosisResult::Failure(text) => text,
    };

    Ok(Json(DiagnoseResponse {
        outcome,
        text,
        model: state.diagnoser.model_id().to_string(),
        processing_time_ms: start.elapsed().as_millis(),
    }))
}

pub async fn probe(State(state): State<Arc<AppState>>) -> Json<ProbeResponse> {
    let message = crate::probe::probe(state.model.as_ref()).await;
    Json(ProbeResponse { message })
}

/// Pulls the first image field out of the form and decodes it.
async fn read_upload(mut multipart: Multipart) -> Result<DynamicImage, InputError> {
    while let Some(field) = multipart.next_field().await.map_err(upload_error)? {
        let file_name = field.file_name().map(str::to_owned);
        if field.name() != Some("image") && file_name.is_none() {
            continue;
        }
        let content_type = field.content_type().map(str::to_owned);

        // Browsers submit an empty part with `filename=""` when no file was chosen.
        let data = field.bytes().await.map_err(upload_error)?;
        if data.is_empty() {
            return Err(InputError::MissingImage);
        }
        let file_name = file_name.filter(|name| !name.is_empty());
        check_declared_type(file_name.as_deref(), content_type.as_deref())?;

        tracing::debug!(
            bytes = data.len(),
            file = file_name.as_deref().unwrap_or("-"),
            "received upload"
        );
        return decode_upload(&data);
    }
    Err(InputError::MissingImage)
}

fn check_declared_type(
    file_name: Option<&str>,
    content_type: Option<&str>,
) -> Result<(), InputError> {
    let extension = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase());
    let content_type = content_type.map(str::to_ascii_lowercase);

    match (extension, content_type) {
        (Some(ext), _) if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        (Some(ext), _) => Err(InputError::UnsupportedType(ext)),
        (None, Some(ct)) if ACCEPTED_CONTENT_TYPES.contains(&ct.as_str()) => Ok(()),
        (None, Some(ct)) => Err(InputError::UnsupportedType(ct)),
        (None, None) => Err(InputError::UnsupportedType("unknown".to_string())),
    }
}

fn decode_upload(data: &[u8]) -> Result<DynamicImage, InputError> {
    let format = image::guess_format(data)?;
    if !matches!(format, ImageFormat::Jpeg | ImageFormat::Png) {
        return Err(InputError::UnsupportedType(format!("{format:?}").to_lowercase()));
    }
    Ok(image::load_from_memory_with_format(data, format)?)
}
