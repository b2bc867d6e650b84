use crate::config::Config;
use crate::downscaler::interface::Downscaler;
use crate::file_action::interface::FileAction;
use crate::frame_sampler::interface::FrameSampler;
use crate::library::logger::interface::Logger;
use crate::sorter::aggregator::FrameAggregator;
use crate::sorter::label_gate::LabelGate;
use crate::sorter::quality_gate::QualityGate;
use crate::vision_client::interface::VisionClient;
use std::sync::Arc;

pub struct Sorter {
    pub config: Config,
    pub logger: Arc<dyn Logger + Send + Sync>,
    pub aggregator: FrameAggregator,
    pub frame_sampler: Arc<dyn FrameSampler + Send + Sync>,
    pub downscaler: Arc<dyn Downscaler + Send + Sync>,
    pub file_action: Arc<dyn FileAction + Send + Sync>,
}

impl Sorter {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        vision_client: Arc<dyn VisionClient + Send + Sync>,
        frame_sampler: Arc<dyn FrameSampler + Send + Sync>,
        downscaler: Arc<dyn Downscaler + Send + Sync>,
        file_action: Arc<dyn FileAction + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("sorter");

        let aggregator = FrameAggregator::new(
            QualityGate::new(vision_client.clone(), config.quality_retry, logger.clone()),
            LabelGate::new(vision_client, config.label_retry, logger.clone()),
            logger.clone(),
        );

        Self {
            config,
            logger,
            aggregator,
            frame_sampler,
            downscaler,
            file_action,
        }
    }
}
