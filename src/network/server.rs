use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::ServerSettings;
use crate::error::AppError;
use crate::network::routes::{analyze, health, AppState};

pub struct Server {
    settings: ServerSettings,
    state: AppState,
}

impl Server {
    pub fn new(settings: ServerSettings, state: AppState) -> Self {
        Self { settings, state }
    }

    pub async fn start(&self) -> Result<(), AppError> {
        let address = format!("{}:{}", self.settings.host, self.settings.port);
        info!("Starting recognition server on {}", address);

        let listener = TcpListener::bind(&address)
            .await
            .map_err(|e| AppError::Bind(e, self.settings.port))?;

        axum::serve(
            listener,
            router(self.state.clone(), self.settings.max_upload_bytes),
        )
        .await
        .map_err(AppError::Server)
    }
}

/// Builds the HTTP routes. The browser frontend is served from another
/// origin, so CORS is open.
pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/analyze", post(analyze))
        .route("/health", get(health))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state.with_upload_limit(max_upload_bytes))
}
