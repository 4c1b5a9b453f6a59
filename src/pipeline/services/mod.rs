pub mod image;
pub mod recognition_service;

pub use recognition_service::FoodRecognizer;
