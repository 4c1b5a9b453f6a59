pub mod classifier_config;
pub mod color_band;
pub mod decoder;
pub mod food_classifier;

pub use classifier_config::ClassifierConfig;
pub use color_band::{default_bands, ColorBand, HueRange};
pub use decoder::ImageDecoder;
pub use food_classifier::ColorAreaClassifier;
