use std::sync::Arc;

use axum::extract::multipart::{Multipart, MultipartError};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tokio::sync::Semaphore;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower::{ServiceBuilder, ServiceExt};
use tracing::{info, warn};

use crate::error::AppError;
use crate::nutrition::{NutritionFacts, NutritionLookup};
use crate::pipeline::{FoodLabel, FoodRecognizer, Recognition};

const IMAGE_FIELD: &str = "image";

/// Shared by every request; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    recognizer: FoodRecognizer,
    recognition_permits: Arc<Semaphore>,
    nutrition: Arc<dyn NutritionLookup>,
    upload_limit: Option<usize>,
}

impl AppState {
    pub fn new(
        recognizer: FoodRecognizer,
        nutrition: Arc<dyn NutritionLookup>,
        max_concurrent_recognitions: usize,
    ) -> Self {
        Self {
            recognizer,
            recognition_permits: Arc::new(Semaphore::new(max_concurrent_recognitions)),
            nutrition,
            upload_limit: None,
        }
    }

    /// Records the body limit so oversized uploads are reported in bytes.
    pub(crate) fn with_upload_limit(mut self, max_upload_bytes: usize) -> Self {
        self.upload_limit = Some(max_upload_bytes);
        self
    }

    async fn recognize(&self, upload: Bytes) -> Result<Recognition, AppError> {
        ServiceBuilder::new()
            .layer(GlobalConcurrencyLimitLayer::with_semaphore(
                self.recognition_permits.clone(),
            ))
            .service(self.recognizer.clone())
            .oneshot(upload)
            .await
    }
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<FoodLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionFacts>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalyzeResponse {
    fn not_recognized() -> Self {
        Self {
            food: Some(FoodLabel::Unknown),
            message: Some("Food not recognized".to_string()),
            nutrition: None,
            error: None,
        }
    }

    fn recognized(food: FoodLabel, nutrition: NutritionFacts) -> Self {
        Self {
            food: Some(food),
            message: Some(format!("Recognized {food}")),
            nutrition: Some(nutrition),
            error: None,
        }
    }

    fn lookup_failed(food: FoodLabel, error: String) -> Self {
        Self {
            food: Some(food),
            message: Some(format!("Recognized {food}, but nutrition lookup failed")),
            nutrition: None,
            error: Some(error),
        }
    }

    fn failure(error: String) -> Self {
        Self {
            food: None,
            message: Some(error.clone()),
            nutrition: None,
            error: Some(error),
        }
    }
}

fn reply(status: StatusCode, body: AnalyzeResponse) -> Response {
    (status, Json(body)).into_response()
}

/// `POST /analyze` with a multipart `image` field.
pub async fn analyze(State(state): State<AppState>, multipart: Multipart) -> Response {
    let upload = match read_image_field(multipart, state.upload_limit).await {
        Ok(upload) => upload,
        Err((status, message)) => {
            return reply(status, AnalyzeResponse::failure(message));
        }
    };

    let recognition = match state.recognize(upload).await {
        Ok(recognition) => recognition,
        Err(AppError::Decode(e)) => {
            return reply(
                StatusCode::BAD_REQUEST,
                AnalyzeResponse::failure(format!("could not decode image: {e}")),
            );
        }
        Err(e) => {
            warn!("Recognition failed: {}", e);
            return reply(
                StatusCode::INTERNAL_SERVER_ERROR,
                AnalyzeResponse::failure(e.to_string()),
            );
        }
    };

    if !recognition.label.is_recognized() {
        return reply(StatusCode::OK, AnalyzeResponse::not_recognized());
    }

    match state.nutrition.lookup(recognition.label.as_str()).await {
        Ok(facts) => {
            info!(
                recognition_id = %recognition.id,
                fdc_id = facts.fdc_id,
                "Nutrition lookup succeeded"
            );
            reply(
                StatusCode::OK,
                AnalyzeResponse::recognized(recognition.label, facts),
            )
        }
        Err(e) => {
            warn!(
                recognition_id = %recognition.id,
                "Nutrition lookup for {} failed: {}",
                recognition.label,
                e
            );
            reply(
                StatusCode::BAD_GATEWAY,
                AnalyzeResponse::lookup_failed(recognition.label, e.to_string()),
            )
        }
    }
}

async fn read_image_field(
    mut multipart: Multipart,
    upload_limit: Option<usize>,
) -> Result<Bytes, (StatusCode, String)> {
    let rejection = |error| multipart_rejection(error, upload_limit);
    while let Some(field) = multipart.next_field().await.map_err(rejection)? {
        if field.name() == Some(IMAGE_FIELD) {
            return field.bytes().await.map_err(rejection);
        }
    }

    Err((
        StatusCode::BAD_REQUEST,
        format!("missing multipart field `{IMAGE_FIELD}`"),
    ))
}

fn multipart_rejection(error: MultipartError, upload_limit: Option<usize>) -> (StatusCode, String) {
    let status = error.status();
    let message = match upload_limit {
        Some(limit) if status == StatusCode::PAYLOAD_TOO_LARGE => {
            format!("upload exceeds {limit} bytes")
        }
        _ => error.body_text(),
    };
    (status, message)
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
