use std::sync::Arc;
use std::task::{Context, Poll};

use bytes::Bytes;
use futures::future::BoxFuture;
use tower::Service;
use tracing::info;

use crate::error::AppError;
use crate::pipeline::services::image::{ClassifierConfig, ColorAreaClassifier, ImageDecoder};
use crate::pipeline::types::Recognition;

/// Decodes an upload and classifies it.
///
/// As a [`Service`], each call runs the CPU-bound work on the blocking pool,
/// so it can be layered with tower middleware from async code.
#[derive(Debug, Clone)]
pub struct FoodRecognizer {
    decoder: ImageDecoder,
    classifier: Arc<ColorAreaClassifier>,
}

impl FoodRecognizer {
    pub fn new(config: ClassifierConfig) -> Self {
        Self {
            decoder: ImageDecoder::new(),
            classifier: Arc::new(ColorAreaClassifier::new(config)),
        }
    }

    pub fn recognize(&self, raw: &[u8]) -> Result<Recognition, AppError> {
        let image = self.decoder.decode(raw)?;
        let analysis = self.classifier.analyze(&image);
        let recognition = Recognition::new(image.width(), image.height(), analysis);

        info!(
            recognition_id = %recognition.id,
            label = %recognition.label,
            width = recognition.width,
            height = recognition.height,
            "Classified upload"
        );

        Ok(recognition)
    }
}

impl Default for FoodRecognizer {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl Service<Bytes> for FoodRecognizer {
    type Response = Recognition;
    type Error = AppError;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, upload: Bytes) -> Self::Future {
        let recognizer = self.clone();

        Box::pin(async move {
            tokio::task::spawn_blocking(move || recognizer.recognize(&upload))
                .await
                .map_err(|e| AppError::Task(e.to_string()))?
        })
    }
}
