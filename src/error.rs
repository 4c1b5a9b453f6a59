use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Decode Error: {0}")]
    Decode(#[from] DecodeError),
    #[error("Nutrition Error: {0}")]
    Nutrition(#[from] NutritionError),
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),
    #[error("Failed to bind to port {1}: {0}")]
    Bind(std::io::Error, u16),
    #[error("Server stopped unexpectedly: {0}")]
    Server(std::io::Error),
    #[error("Recognition task failed: {0}")]
    Task(String),
}

// Image Decode Error Type
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("no image bytes were supplied")]
    Empty,
    #[error("unrecognized image format: {0}")]
    UnsupportedFormat(String),
    #[error("malformed image data: {0}")]
    Malformed(String),
    #[error("decoded image has no pixels ({0}x{1})")]
    EmptyDimensions(u32, u32),
}

impl From<image::ImageError> for DecodeError {
    fn from(error: image::ImageError) -> Self {
        match error {
            image::ImageError::Unsupported(e) => Self::UnsupportedFormat(e.to_string()),
            other => Self::Malformed(other.to_string()),
        }
    }
}

// Nutrition Lookup Error Type
#[derive(Error, Debug)]
pub enum NutritionError {
    #[error("Food name must not be empty")]
    InvalidQuery,
    #[error("No API key configured for the nutrition service")]
    MissingApiKey,
    #[error("Failed to reach the nutrition service: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Nutrition service answered HTTP {0}: {1}")]
    Status(u16, String),
    #[error("Failed to parse nutrition response: {0}")]
    Parse(String),
    #[error("No nutrition data found for {0}")]
    NotFound(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
