use image::RgbImage;

use crate::error::DecodeError;

/// Decoded pixel grid with interleaved blue, green, red channels.
///
/// Width and height are always non-zero; the only way to build one is
/// through [`BgrImage::from_raw`] or `TryFrom<RgbImage>`, both of which
/// reject empty grids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgrImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl BgrImage {
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let expected = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(3)?;
        if data.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        Some([
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ])
    }

    /// Row-major iterator over `[blue, green, red]` triples.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data.chunks_exact(3).map(|px| [px[0], px[1], px[2]])
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

impl TryFrom<RgbImage> for BgrImage {
    type Error = DecodeError;

    fn try_from(rgb: RgbImage) -> Result<Self, Self::Error> {
        let (width, height) = rgb.dimensions();
        if width == 0 || height == 0 {
            return Err(DecodeError::EmptyDimensions(width, height));
        }

        let mut data = rgb.into_raw();
        for px in data.chunks_exact_mut(3) {
            px.swap(0, 2);
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};

    #[test]
    fn converting_rgb_swaps_red_and_blue() {
        let rgb = ImageBuffer::<Rgb<u8>, Vec<u8>>::from_pixel(4, 3, Rgb([10, 20, 30]));
        let bgr = BgrImage::try_from(rgb).unwrap();

        assert_eq!(bgr.dimensions(), (4, 3));
        assert_eq!(bgr.area(), 12);
        assert!(bgr.pixels().all(|px| px == [30, 20, 10]));
    }

    #[test]
    fn get_pixel_addresses_row_major() {
        let rgb = ImageBuffer::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 0]));
        let bgr = BgrImage::try_from(rgb).unwrap();

        assert_eq!(bgr.get_pixel(2, 1), Some([0, 1, 2]));
        assert_eq!(bgr.get_pixel(3, 0), None);
        assert_eq!(bgr.get_pixel(0, 2), None);
    }

    #[test]
    fn empty_grids_are_rejected() {
        let rgb: RgbImage = ImageBuffer::new(0, 5);
        assert!(matches!(
            BgrImage::try_from(rgb),
            Err(DecodeError::EmptyDimensions(0, 5))
        ));
        assert!(BgrImage::from_raw(0, 1, Vec::new()).is_none());
    }

    #[test]
    fn from_raw_checks_buffer_length() {
        assert!(BgrImage::from_raw(2, 2, vec![0; 11]).is_none());
        assert!(BgrImage::from_raw(2, 2, vec![0; 12]).is_some());
    }
}
