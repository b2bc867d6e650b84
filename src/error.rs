use crate::downscaler::interface::DownscaleError;
use crate::file_action::interface::FileActionError;
use crate::frame_sampler::interface::SampleError;
use crate::vision_client::interface::VisionError;

#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("vision query failed: {0}")]
    Transport(#[from] VisionError),

    #[error("quality response is not an integer: {response:?}")]
    UnparseableResponse { response: String },

    #[error("no frames to evaluate")]
    NoFrames,

    #[error("frame sampling failed: {0}")]
    Sample(#[from] SampleError),

    #[error("downscale failed: {0}")]
    Downscale(#[from] DownscaleError),

    #[error("filesystem action failed: {0}")]
    Filesystem(#[from] FileActionError),
}
