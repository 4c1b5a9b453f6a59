use std::sync::Arc;

use nutrilens::{AppError, AppState, Configuration, FoodRecognizer, Server, UsdaNutritionClient};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_logging();
    let configuration = Configuration::load()?;

    if configuration.nutrition.api_key.is_empty() {
        tracing::warn!("No USDA API key configured, nutrition lookups will fail");
    }

    let recognizer = FoodRecognizer::new(configuration.classifier.clone());
    let nutrition = UsdaNutritionClient::new(configuration.nutrition.clone())?;
    let state = AppState::new(
        recognizer,
        Arc::new(nutrition),
        configuration.server.max_concurrent_recognitions,
    );

    Server::new(configuration.server, state).start().await
}
