use crate::library::retry::RetryPolicy;
use std::ops::RangeInclusive;
use std::time::Duration;

pub type QualityScore = u8;

pub const QUALITY_SCORE_RANGE: RangeInclusive<QualityScore> = 1..=5;

pub const QUALITY_PASS_THRESHOLD: QualityScore = 3;
pub const QUALITY_RETRY_THRESHOLD: QualityScore = 4;

pub const LOW_QUALITY_DIRECTORY: &str = "_lowq";
pub const NO_DETECTION_DIRECTORY: &str = "none";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backend {
    Ollama { endpoint: String },
    OpenAi { endpoint: String, api_key: Option<String> },
    Fake,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: Backend,
    pub model: String,
    pub region: String,
    pub max_width: u32,
    pub request_timeout: Duration,
    pub quality_retry: RetryPolicy,
    pub label_retry: RetryPolicy,
    pub dry_run: bool,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::Ollama {
                endpoint: "http://localhost:11434".to_string(),
            },
            model: "llava:latest".to_string(),
            region: "Michigan".to_string(),
            max_width: 1200,
            request_timeout: Duration::from_secs(120),
            quality_retry: RetryPolicy::new(3, Duration::from_millis(50)),
            label_retry: RetryPolicy::new(5, Duration::from_millis(50)),
            dry_run: false,
            logger_timezone: local_offset(),
        }
    }
}

fn local_offset() -> chrono::FixedOffset {
    *chrono::Local::now().offset()
}
