use crate::library::logger::interface::Logger;
use crate::vision_client::interface::{VisionClient, VisionError};
use rand::distr::{Distribution, Uniform};
use rand::Rng;
use std::sync::Arc;

const ANSWERS: [&str; 10] = [
    "deer", "fox", "raccoon", "coyote", "turkey", "opossum", "squirrel", "bear", "none", "unknown",
];

/// Answers at random; lets the whole pipeline run without a model server.
pub struct VisionClientFake {
    logger: Arc<dyn Logger + Send + Sync>,
}

impl VisionClientFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("vision_client").with_namespace("fake"),
        }
    }
}

impl VisionClient for VisionClientFake {
    fn query_quality(&self, frame: &[u8]) -> Result<String, VisionError> {
        let score = rand::rng().random_range(1..=5u8);
        let _ = self
            .logger
            .info(&format!("Rated {} byte frame: {}", frame.len(), score));
        Ok(score.to_string())
    }

    fn query_classification(&self, frame: &[u8], region: &str) -> Result<String, VisionError> {
        let index_dist =
            Uniform::new(0, ANSWERS.len()).map_err(|e| VisionError::Protocol(e.to_string()))?;
        let answer = ANSWERS[index_dist.sample(&mut rand::rng())];
        let _ = self.logger.info(&format!(
            "Classified {} byte frame from {}: {}",
            frame.len(),
            region,
            answer
        ));
        Ok(answer.to_string())
    }
}
