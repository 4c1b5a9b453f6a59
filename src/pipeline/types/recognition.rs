use serde::Serialize;
use uuid::Uuid;

use crate::pipeline::types::FoodLabel;

/// Pixel count for one color band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandArea {
    pub band: String,
    pub label: FoodLabel,
    pub pixel_count: u64,
}

/// Outcome of running the color classifier over one image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAreaAnalysis {
    pub label: FoodLabel,
    pub band_areas: Vec<BandArea>,
    pub detection_threshold: f64,
}

/// A classified upload.
#[derive(Debug, Clone, Serialize)]
pub struct Recognition {
    pub id: Uuid,
    pub label: FoodLabel,
    pub width: u32,
    pub height: u32,
    pub band_areas: Vec<BandArea>,
    pub detection_threshold: f64,
}

impl Recognition {
    pub fn new(width: u32, height: u32, analysis: ColorAreaAnalysis) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: analysis.label,
            width,
            height,
            band_areas: analysis.band_areas,
            detection_threshold: analysis.detection_threshold,
        }
    }
}
