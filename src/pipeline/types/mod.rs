mod bgr_image;
mod food_label;
mod hsv_pixel;
mod recognition;

pub use bgr_image::BgrImage;
pub use food_label::FoodLabel;
pub use hsv_pixel::HsvPixel;
pub use recognition::{BandArea, ColorAreaAnalysis, Recognition};
