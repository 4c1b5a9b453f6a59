pub mod config;
pub mod error;
pub mod network;
pub mod nutrition;
pub mod pipeline;

pub use error::{AppError, ConfigError, DecodeError, NutritionError};

pub use config::Configuration;
pub use network::{AppState, Server};
pub use nutrition::{NutritionFacts, NutritionLookup, UsdaNutritionClient};
pub use pipeline::{FoodLabel, FoodRecognizer, Recognition};
