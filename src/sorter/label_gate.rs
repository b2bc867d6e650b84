use crate::error::SortError;
use crate::library::logger::interface::Logger;
use crate::library::retry::{self, Attempt, RetryPolicy};
use crate::sorter::label::Label;
use crate::vision_client::interface::VisionClient;
use std::sync::Arc;

pub struct LabelGate {
    vision_client: Arc<dyn VisionClient + Send + Sync>,
    policy: RetryPolicy,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl LabelGate {
    pub fn new(
        vision_client: Arc<dyn VisionClient + Send + Sync>,
        policy: RetryPolicy,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            vision_client,
            policy,
            logger: logger.with_namespace("label_gate"),
        }
    }

    /// Asks for a single-word animal name, retrying on "none", "unknown" or
    /// anything that is not exactly one word.
    ///
    /// On exhaustion the latest answer is returned as is, so callers must check
    /// [`Label::animal`] before using it. Transport failures are not retried.
    pub fn classify(&self, frame: &[u8], region: &str) -> Result<Label, SortError> {
        retry::run(
            &self.policy,
            |_, latest| latest,
            |attempt| match self.vision_client.query_classification(frame, region) {
                Err(error) => Attempt::Fatal(SortError::Transport(error)),
                Ok(response) => {
                    let label = Label::parse(&response);
                    if label.is_confident() {
                        Attempt::Accept(label)
                    } else {
                        let _ = self.logger.info(&format!(
                            "Got '{}' on attempt {}/{}",
                            label, attempt, self.policy.attempts
                        ));
                        Attempt::Retry(label)
                    }
                }
            },
        )
    }
}
