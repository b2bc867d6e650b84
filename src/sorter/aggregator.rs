use crate::config::{QualityScore, QUALITY_PASS_THRESHOLD};
use crate::error::SortError;
use crate::library::logger::interface::Logger;
use crate::sorter::label_gate::LabelGate;
use crate::sorter::quality_gate::QualityGate;
use crate::sorter::verdict::{FileVerdict, LabelSet};
use std::sync::Arc;

pub struct FrameAggregator {
    quality_gate: QualityGate,
    label_gate: LabelGate,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl FrameAggregator {
    pub fn new(
        quality_gate: QualityGate,
        label_gate: LabelGate,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            quality_gate,
            label_gate,
            logger: logger.with_namespace("aggregator"),
        }
    }

    /// Folds every frame of one file into a single verdict.
    ///
    /// Frames are evaluated in the given order. Frames scoring below the pass
    /// threshold are not classified. Any hard error aborts the whole file.
    pub fn aggregate(&self, frames: &[Vec<u8>], region: &str) -> Result<FileVerdict, SortError> {
        let mut max_quality: Option<QualityScore> = None;
        let mut labels = LabelSet::new();

        for (index, frame) in frames.iter().enumerate() {
            let score = self.quality_gate.qualify(frame)?;
            max_quality = Some(max_quality.map_or(score, |best| best.max(score)));

            if score < QUALITY_PASS_THRESHOLD {
                let _ = self.logger.info(&format!(
                    "Frame {}: quality {}; not classifying",
                    index + 1,
                    score
                ));
                continue;
            }

            let label = self.label_gate.classify(frame, region)?;
            match label.animal() {
                Some(animal) => {
                    labels.insert(animal);
                    let _ = self
                        .logger
                        .info(&format!("Frame {}: detected {}", index + 1, animal));
                }
                None => {
                    let _ = self
                        .logger
                        .info(&format!("Frame {}: no confident label ({})", index + 1, label));
                }
            }
        }

        let max_quality = max_quality.ok_or(SortError::NoFrames)?;

        Ok(FileVerdict {
            max_quality,
            labels,
            is_multi_frame: frames.len() > 1,
        })
    }
}
