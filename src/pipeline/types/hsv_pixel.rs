/// A pixel in 8-bit HSV, hue in half-degree units.
///
/// Hue lies in `[0, 180)`, saturation and value in `[0, 255]`, matching the
/// layout OpenCV produces for 8-bit images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HsvPixel {
    pub hue: u8,
    pub saturation: u8,
    pub value: u8,
}

impl HsvPixel {
    pub fn new(hue: u8, saturation: u8, value: u8) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Converts a `[blue, green, red]` triple with the same fixed-point
    /// arithmetic OpenCV uses for 8-bit `COLOR_BGR2HSV`, so band edges agree
    /// with it exactly.
    pub fn from_bgr([b, g, r]: [u8; 3]) -> Self {
        let value = b.max(g).max(r);
        let diff = i32::from(value - b.min(g).min(r));
        let (b, g, r, v) = (i32::from(b), i32::from(g), i32::from(r), i32::from(value));

        let saturation = (diff * SATURATION_DIVISORS[value as usize] + HALF) >> HSV_SHIFT;

        // Red wins ties, then green.
        let sector = if v == r {
            g - b
        } else if v == g {
            b - r + 2 * diff
        } else {
            r - g + 4 * diff
        };
        let mut hue = (sector * HUE_DIVISORS[diff as usize] + HALF) >> HSV_SHIFT;
        if hue < 0 {
            hue += HUE_RANGE;
        }

        Self {
            hue: hue as u8,
            saturation: saturation as u8,
            value,
        }
    }
}

const HSV_SHIFT: i32 = 12;
const HALF: i32 = 1 << (HSV_SHIFT - 1);
const HUE_RANGE: i32 = 180;

/// `round((255 << 12) / v)`, zero at index 0.
const SATURATION_DIVISORS: [i32; 256] = divisor_table(255 << HSV_SHIFT, 1);
/// `round((180 << 12) / (6 * diff))`, zero at index 0.
const HUE_DIVISORS: [i32; 256] = divisor_table(HUE_RANGE << HSV_SHIFT, 6);

const fn divisor_table(numerator: i32, scale: i32) -> [i32; 256] {
    let mut table = [0; 256];
    let mut i = 1;
    while i < 256 {
        table[i] = div_round_half_even(numerator, scale * i as i32);
        i += 1;
    }
    table
}

const fn div_round_half_even(numerator: i32, denominator: i32) -> i32 {
    let quotient = numerator / denominator;
    let twice_remainder = 2 * (numerator % denominator);
    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_land_on_opencv_hues() {
        assert_eq!(HsvPixel::from_bgr([0, 0, 255]), HsvPixel::new(0, 255, 255));
        assert_eq!(HsvPixel::from_bgr([0, 255, 0]), HsvPixel::new(60, 255, 255));
        assert_eq!(HsvPixel::from_bgr([255, 0, 0]), HsvPixel::new(120, 255, 255));
    }

    #[test]
    fn secondaries_and_mixes() {
        // yellow, cyan, magenta
        assert_eq!(HsvPixel::from_bgr([0, 255, 255]).hue, 30);
        assert_eq!(HsvPixel::from_bgr([255, 255, 0]).hue, 90);
        assert_eq!(HsvPixel::from_bgr([255, 0, 255]).hue, 150);
        // orange (255, 165, 0) in RGB
        assert_eq!(HsvPixel::from_bgr([0, 165, 255]).hue, 19);
    }

    #[test]
    fn hue_just_below_red_wraps_to_the_top_of_the_range() {
        // red dominant with blue above green gives a small negative angle
        let px = HsvPixel::from_bgr([40, 0, 255]);
        assert_eq!(px.hue, 175);
        assert_eq!(px.saturation, 255);
    }

    #[test]
    fn achromatic_pixels_have_zero_hue_and_saturation() {
        assert_eq!(HsvPixel::from_bgr([128, 128, 128]), HsvPixel::new(0, 0, 128));
        assert_eq!(HsvPixel::from_bgr([0, 0, 0]), HsvPixel::new(0, 0, 0));
        assert_eq!(HsvPixel::from_bgr([255, 255, 255]), HsvPixel::new(0, 0, 255));
    }

    #[test]
    fn saturation_follows_fixed_point_rounding() {
        // chroma 100, value 200 is 127.5 exactly, the table rounds it down
        assert_eq!(HsvPixel::from_bgr([100, 100, 200]).saturation, 127);
        assert_eq!(HsvPixel::from_bgr([10, 10, 250]).saturation, 245);
    }

    #[test]
    fn band_edge_colors_match_opencv() {
        // 30 * 69 / 218 = 9.49 in floating point, OpenCV reports 10
        assert_eq!(HsvPixel::from_bgr([0, 69, 218]), HsvPixel::new(10, 255, 218));
        // 30 * 70 / 200 = 10.5 in floating point, OpenCV reports 10
        assert_eq!(HsvPixel::from_bgr([0, 70, 200]), HsvPixel::new(10, 255, 200));
        assert_eq!(HsvPixel::from_bgr([0, 187, 255]).hue, 22);
    }

    #[test]
    fn divisor_tables_hold_rounded_reciprocals() {
        assert_eq!(SATURATION_DIVISORS[0], 0);
        assert_eq!(SATURATION_DIVISORS[1], 255 << HSV_SHIFT);
        assert_eq!(SATURATION_DIVISORS[200], 5222);
        assert_eq!(SATURATION_DIVISORS[255], 4096);
        assert_eq!(HUE_DIVISORS[0], 0);
        assert_eq!(HUE_DIVISORS[200], 614);
        assert_eq!(HUE_DIVISORS[218], 564);
        assert_eq!(HUE_DIVISORS[255], 482);
    }

    #[test]
    fn hue_stays_below_180_for_every_primary_mix() {
        for r in (0..=255u16).step_by(15) {
            for g in (0..=255u16).step_by(15) {
                for b in (0..=255u16).step_by(15) {
                    let px = HsvPixel::from_bgr([b as u8, g as u8, r as u8]);
                    assert!(px.hue < 180, "hue {} for rgb({r},{g},{b})", px.hue);
                }
            }
        }
    }
}
