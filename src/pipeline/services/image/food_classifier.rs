use tracing::debug;

use super::classifier_config::ClassifierConfig;
use crate::pipeline::types::{BandArea, BgrImage, ColorAreaAnalysis, FoodLabel, HsvPixel};

/// Rule-based classifier that names a food by which color band covers
/// enough of the image.
#[derive(Debug, Clone, Default)]
pub struct ColorAreaClassifier {
    config: ClassifierConfig,
}

impl ColorAreaClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn classify(&self, image: &BgrImage) -> FoodLabel {
        self.analyze(image).label
    }

    /// Classifies and keeps the per-band counts that led to the label.
    pub fn analyze(&self, image: &BgrImage) -> ColorAreaAnalysis {
        let band_areas = self.band_areas(image);
        let detection_threshold = self.detection_threshold(image);

        for area in &band_areas {
            debug!(
                band = %area.band,
                pixels = area.pixel_count,
                threshold = detection_threshold,
                "Color band area"
            );
        }

        // First band over the threshold wins, regardless of which is largest.
        let label = band_areas
            .iter()
            .find(|area| area.pixel_count as f64 > detection_threshold)
            .map(|area| area.label)
            .unwrap_or(FoodLabel::Unknown);

        ColorAreaAnalysis {
            label,
            band_areas,
            detection_threshold,
        }
    }

    pub fn detection_threshold(&self, image: &BgrImage) -> f64 {
        image.area() as f64 * self.config.detection_ratio
    }

    /// Counts matching pixels for every configured band, in band order.
    /// Bands are independent, so one pixel can count toward several.
    pub fn band_areas(&self, image: &BgrImage) -> Vec<BandArea> {
        let bands = &self.config.bands;
        let mut counts = vec![0u64; bands.len()];

        for bgr in image.pixels() {
            let hsv = HsvPixel::from_bgr(bgr);
            for (count, band) in counts.iter_mut().zip(bands) {
                if band.contains(hsv) {
                    *count += 1;
                }
            }
        }

        bands
            .iter()
            .zip(counts)
            .map(|(band, pixel_count)| BandArea {
                band: band.name.clone(),
                label: band.label,
                pixel_count,
            })
            .collect()
    }
}
