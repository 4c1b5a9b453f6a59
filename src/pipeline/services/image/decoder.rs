use std::io::Cursor;

use image::ImageReader;
use tracing::debug;

use crate::error::DecodeError;
use crate::pipeline::types::BgrImage;

/// Turns uploaded bytes into a [`BgrImage`] at native resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageDecoder;

impl ImageDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, raw: &[u8]) -> Result<BgrImage, DecodeError> {
        if raw.is_empty() {
            return Err(DecodeError::Empty);
        }

        let reader = ImageReader::new(Cursor::new(raw))
            .with_guessed_format()
            .map_err(|e| DecodeError::Malformed(e.to_string()))?;

        let Some(format) = reader.format() else {
            return Err(DecodeError::UnsupportedFormat(
                "unrecognized image container".to_string(),
            ));
        };

        let image = reader.decode()?;
        debug!(
            "Decoded {:?} image {}x{}",
            format,
            image.width(),
            image.height()
        );

        BgrImage::try_from(image.to_rgb8())
    }
}
