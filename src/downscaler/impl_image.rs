use crate::downscaler::interface::{DownscaleError, Downscaler};
use image::{imageops, DynamicImage, ImageFormat};
use std::io::Cursor;

pub struct DownscalerImage {}

impl DownscalerImage {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for DownscalerImage {
    fn default() -> Self {
        Self::new()
    }
}

impl Downscaler for DownscalerImage {
    fn downscale(&self, frame: Vec<u8>, max_width: u32) -> Result<Vec<u8>, DownscaleError> {
        let image = image::load_from_memory(&frame).map_err(DownscaleError::Decode)?;

        let (width, height) = (image.width(), image.height());
        if width < 1 || height < 1 {
            return Err(DownscaleError::InvalidDimensions { width, height });
        }

        if width <= max_width {
            return Ok(frame);
        }

        let (new_width, new_height) = scaled_size(width, height, max_width);
        let resized = image.resize_exact(new_width, new_height, imageops::FilterType::Lanczos3);

        // JPEG has no alpha channel
        let rgb = DynamicImage::ImageRgb8(resized.to_rgb8());
        let mut encoded = Cursor::new(Vec::new());
        rgb.write_to(&mut encoded, ImageFormat::Jpeg)
            .map_err(DownscaleError::Encode)?;

        Ok(encoded.into_inner())
    }
}

pub(crate) fn scaled_size(width: u32, height: u32, max_width: u32) -> (u32, u32) {
    let scale = max_width as f64 / width as f64;
    let new_height = ((height as f64) * scale) as u32;
    (max_width, new_height.max(1))
}
