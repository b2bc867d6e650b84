#[derive(Debug, thiserror::Error)]
pub enum DownscaleError {
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),
}

pub trait Downscaler: Send + Sync {
    /// Shrinks `frame` to at most `max_width` pixels wide, returning it untouched
    /// when it already fits.
    fn downscale(&self, frame: Vec<u8>, max_width: u32) -> Result<Vec<u8>, DownscaleError>;
}
