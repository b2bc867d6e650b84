use crate::config::{QualityScore, QUALITY_RETRY_THRESHOLD, QUALITY_SCORE_RANGE};
use crate::error::SortError;
use crate::library::logger::interface::Logger;
use crate::library::retry::{self, Attempt, RetryPolicy};
use crate::vision_client::interface::VisionClient;
use std::sync::Arc;

pub struct QualityGate {
    vision_client: Arc<dyn VisionClient + Send + Sync>,
    policy: RetryPolicy,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl QualityGate {
    pub fn new(
        vision_client: Arc<dyn VisionClient + Send + Sync>,
        policy: RetryPolicy,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            vision_client,
            policy,
            logger: logger.with_namespace("quality_gate"),
        }
    }

    /// Scores one frame, retrying while the score is below the retry threshold.
    ///
    /// Running out of attempts is not an error: the last score seen is returned.
    /// Transport failures are retried on the same budget and only surface when
    /// no score was ever received. An answer that is not an integer from 1 to 5
    /// fails immediately.
    pub fn qualify(&self, frame: &[u8]) -> Result<QualityScore, SortError> {
        retry::run(&self.policy, |_, latest| latest, |attempt| {
            match self.vision_client.query_quality(frame) {
                Err(error) => {
                    let _ = self.logger.warn(&format!(
                        "Quality query attempt {}/{} failed: {}",
                        attempt, self.policy.attempts, error
                    ));
                    Attempt::Transient(SortError::Transport(error))
                }
                Ok(response) => match parse_score(&response) {
                    None => Attempt::Fatal(SortError::UnparseableResponse { response }),
                    Some(score) if score >= QUALITY_RETRY_THRESHOLD => Attempt::Accept(score),
                    Some(score) => {
                        let _ = self.logger.info(&format!(
                            "Got low quality {} on attempt {}/{}",
                            score, attempt, self.policy.attempts
                        ));
                        Attempt::Retry(score)
                    }
                },
            }
        })
    }
}

fn parse_score(response: &str) -> Option<QualityScore> {
    response
        .trim()
        .parse()
        .ok()
        .filter(|score| QUALITY_SCORE_RANGE.contains(score))
}
