use serde::{Deserialize, Serialize};

use super::color_band::{default_bands, ColorBand};

/// Tunable parameters for the color-area classifier.
///
/// Bands are evaluated in the order they appear in `bands`; the first one
/// whose pixel count exceeds `detection_ratio` of the image area wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub detection_ratio: f64,
    pub bands: Vec<ColorBand>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            detection_ratio: 0.05, // 5% of the image
            bands: default_bands(),
        }
    }
}

impl ClassifierConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if !(self.detection_ratio > 0.0 && self.detection_ratio <= 1.0) {
            return Err("Detection ratio must be in (0.0, 1.0]".to_string());
        }

        if self.bands.is_empty() {
            return Err("At least one color band must be configured".to_string());
        }

        for band in &self.bands {
            if band.hue_ranges.is_empty() {
                return Err(format!("Band {} has no hue ranges", band.name));
            }
            for range in &band.hue_ranges {
                if range.min > range.max || range.max > 180 {
                    return Err(format!(
                        "Band {} has invalid hue range {}..={}",
                        band.name, range.min, range.max
                    ));
                }
            }
        }

        Ok(())
    }

    /// Set the share of the image a band must exceed
    pub fn with_detection_ratio(mut self, ratio: f64) -> Self {
        self.detection_ratio = ratio;
        self
    }

    /// Replace the band table, keeping the given priority order
    pub fn with_bands(mut self, bands: Vec<ColorBand>) -> Self {
        self.bands = bands;
        self
    }
}
