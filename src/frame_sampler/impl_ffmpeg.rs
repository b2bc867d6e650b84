use crate::frame_sampler::interface::{FrameSampler, MediaKind, SampleError};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

const SAMPLE_FRACTIONS: [f64; 3] = [0.3, 0.5, 0.7];
const FALLBACK_DURATION_SECS: f64 = 10.0;

#[derive(Debug, Deserialize)]
struct ProbeOutput {
    format: ProbeFormat,
}

#[derive(Debug, Deserialize)]
struct ProbeFormat {
    duration: Option<String>,
}

/// Reads stills straight from disk and shells out to `ffprobe`/`ffmpeg` for video.
pub struct FrameSamplerFfmpeg {
    ffmpeg: String,
    ffprobe: String,
}

impl FrameSamplerFfmpeg {
    pub fn new() -> Self {
        Self {
            ffmpeg: "ffmpeg".to_string(),
            ffprobe: "ffprobe".to_string(),
        }
    }

    fn probe_duration(&self, path: &Path) -> Result<f64, SampleError> {
        let output = Command::new(&self.ffprobe)
            .args(["-v", "error", "-show_entries", "format=duration", "-of", "json"])
            .arg(path)
            .output()
            .map_err(|e| SampleError::Probe {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(SampleError::Probe {
                path: path.to_path_buf(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(parse_duration(&output.stdout).unwrap_or(FALLBACK_DURATION_SECS))
    }

    fn extract_frame(&self, path: &Path, position: f64) -> Result<Vec<u8>, SampleError> {
        let output = Command::new(&self.ffmpeg)
            .args(["-v", "error", "-ss"])
            .arg(format!("{:.3}", position))
            .arg("-i")
            .arg(path)
            .args(["-frames:v", "1", "-f", "image2", "-vcodec", "mjpeg", "pipe:1"])
            .output()
            .map_err(|e| SampleError::Extract {
                position,
                message: e.to_string(),
            })?;

        if !output.status.success() || output.stdout.is_empty() {
            return Err(SampleError::Extract {
                position,
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

impl Default for FrameSamplerFfmpeg {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameSampler for FrameSamplerFfmpeg {
    fn sample(&self, path: &Path, kind: MediaKind) -> Result<Vec<Vec<u8>>, SampleError> {
        match kind {
            MediaKind::Image => {
                let content = std::fs::read(path).map_err(|source| SampleError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Ok(vec![content])
            }
            MediaKind::Video => {
                let duration = self.probe_duration(path)?;
                sample_positions(duration)
                    .into_iter()
                    .map(|position| self.extract_frame(path, position))
                    .collect()
            }
        }
    }
}

pub(crate) fn sample_positions(duration: f64) -> [f64; 3] {
    SAMPLE_FRACTIONS.map(|fraction| duration * fraction)
}

pub(crate) fn parse_duration(probe_json: &[u8]) -> Option<f64> {
    let probe: ProbeOutput = serde_json::from_slice(probe_json).ok()?;
    let duration = probe.format.duration?.trim().parse::<f64>().ok()?;
    if duration.is_finite() && duration > 0.0 {
        Some(duration)
    } else {
        None
    }
}
