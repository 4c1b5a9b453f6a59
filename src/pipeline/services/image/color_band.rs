use serde::{Deserialize, Serialize};

use crate::pipeline::types::{FoodLabel, HsvPixel};

/// Inclusive hue interval in half-degree units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HueRange {
    pub min: u8,
    pub max: u8,
}

impl HueRange {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, hue: u8) -> bool {
        hue >= self.min && hue <= self.max
    }
}

/// Named HSV rule approximating a food by its dominant color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorBand {
    pub name: String,
    pub label: FoodLabel,
    pub hue_ranges: Vec<HueRange>,
    pub saturation_min: u8,
    pub value_min: u8,
}

impl ColorBand {
    pub fn new(
        name: impl Into<String>,
        label: FoodLabel,
        hue_ranges: Vec<HueRange>,
        saturation_min: u8,
        value_min: u8,
    ) -> Self {
        Self {
            name: name.into(),
            label,
            hue_ranges,
            saturation_min,
            value_min,
        }
    }

    pub fn contains(&self, pixel: HsvPixel) -> bool {
        pixel.saturation >= self.saturation_min
            && pixel.value >= self.value_min
            && self.hue_ranges.iter().any(|range| range.contains(pixel.hue))
    }

    /// Red wraps around hue 0, so it needs two intervals.
    pub fn red() -> Self {
        Self::new(
            "red",
            FoodLabel::Apple,
            vec![HueRange::new(0, 10), HueRange::new(160, 180)],
            50,
            50,
        )
    }

    pub fn yellow() -> Self {
        Self::new("yellow", FoodLabel::Banana, vec![HueRange::new(20, 30)], 100, 100)
    }

    pub fn orange() -> Self {
        Self::new("orange", FoodLabel::Orange, vec![HueRange::new(10, 25)], 150, 150)
    }

    pub fn blue() -> Self {
        Self::new("blue", FoodLabel::Blueberry, vec![HueRange::new(100, 140)], 150, 50)
    }
}

/// The built-in bands in detection priority order.
pub fn default_bands() -> Vec<ColorBand> {
    vec![
        ColorBand::red(),
        ColorBand::yellow(),
        ColorBand::orange(),
        ColorBand::blue(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_bounds_are_inclusive() {
        let yellow = ColorBand::yellow();
        assert!(yellow.contains(HsvPixel::new(20, 100, 100)));
        assert!(yellow.contains(HsvPixel::new(30, 255, 255)));
        assert!(!yellow.contains(HsvPixel::new(19, 255, 255)));
        assert!(!yellow.contains(HsvPixel::new(31, 255, 255)));
    }

    #[test]
    fn red_covers_both_ends_of_the_hue_circle() {
        let red = ColorBand::red();
        assert!(red.contains(HsvPixel::new(0, 50, 50)));
        assert!(red.contains(HsvPixel::new(10, 200, 200)));
        assert!(red.contains(HsvPixel::new(160, 200, 200)));
        assert!(red.contains(HsvPixel::new(179, 200, 200)));
        assert!(!red.contains(HsvPixel::new(11, 200, 200)));
        assert!(!red.contains(HsvPixel::new(159, 200, 200)));
    }

    #[test]
    fn saturation_and_value_minimums_apply() {
        let orange = ColorBand::orange();
        assert!(!orange.contains(HsvPixel::new(15, 149, 255)));
        assert!(!orange.contains(HsvPixel::new(15, 255, 149)));
        assert!(orange.contains(HsvPixel::new(15, 150, 150)));

        let blue = ColorBand::blue();
        assert!(blue.contains(HsvPixel::new(120, 150, 50)));
        assert!(!blue.contains(HsvPixel::new(120, 150, 49)));
    }

    #[test]
    fn bands_overlap_where_hues_are_shared() {
        let px = HsvPixel::new(22, 200, 200);
        assert!(ColorBand::yellow().contains(px));
        assert!(ColorBand::orange().contains(px));
    }

    #[test]
    fn default_order_is_red_yellow_orange_blue() {
        let labels: Vec<_> = default_bands().iter().map(|b| b.label).collect();
        assert_eq!(
            labels,
            vec![
                FoodLabel::Apple,
                FoodLabel::Banana,
                FoodLabel::Orange,
                FoodLabel::Blueberry
            ]
        );
    }
}
