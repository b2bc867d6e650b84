use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];
const VIDEO_EXTENSIONS: [&str; 5] = ["mp4", "avi", "mov", "mkv", "webm"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Image)
        } else if VIDEO_EXTENSIONS.contains(&extension.as_str()) {
            Some(Self::Video)
        } else {
            None
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SampleError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to probe {path}: {message}")]
    Probe { path: PathBuf, message: String },

    #[error("failed to extract frame at {position:.2}s: {message}")]
    Extract { position: f64, message: String },
}

/// Turns one media file into the ordered still frames that get evaluated.
///
/// A still image yields itself; a video yields a fixed sequence ordered by
/// position in the clip.
pub trait FrameSampler: Send + Sync {
    fn sample(&self, path: &Path, kind: MediaKind) -> Result<Vec<Vec<u8>>, SampleError>;
}
