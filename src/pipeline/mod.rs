pub mod services;
pub mod types;

pub use services::FoodRecognizer;
pub use types::{BgrImage, FoodLabel, Recognition};
