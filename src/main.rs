use clap::Parser;
use cli::Cli;
use config::{Backend, Config};
use downscaler::impl_image::DownscalerImage;
use file_action::{impl_dry_run::FileActionDryRun, impl_fs::FileActionFs, interface::FileAction};
use frame_sampler::impl_ffmpeg::FrameSamplerFfmpeg;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use sorter::main::Sorter;
use std::sync::Arc;
use vision_client::impl_fake::VisionClientFake;
use vision_client::impl_ollama::VisionClientOllama;
use vision_client::impl_openai::VisionClientOpenAi;
use vision_client::interface::{VisionClient, VisionError};

mod cli;
mod config;
mod downscaler;
mod error;
mod file_action;
mod frame_sampler;
mod library;
mod sorter;
mod vision_client;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let dir = cli.dir.clone();
    let config = cli.into_config()?;

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let vision_client = build_vision_client(&config, logger.clone())?;

    let file_action: Arc<dyn FileAction + Send + Sync> = if config.dry_run {
        Arc::new(FileActionDryRun::new(logger.clone()))
    } else {
        Arc::new(FileActionFs::new(logger.clone()))
    };

    let sorter = Sorter::new(
        config,
        logger.clone(),
        vision_client,
        Arc::new(FrameSamplerFfmpeg::new()),
        Arc::new(DownscalerImage::new()),
        file_action,
    );

    sorter
        .run(&dir)
        .map_err(|e| format!("Failed to read directory '{}': {}", dir.display(), e))?;

    Ok(())
}

fn build_vision_client(
    config: &Config,
    logger: Arc<dyn Logger + Send + Sync>,
) -> Result<Arc<dyn VisionClient + Send + Sync>, VisionError> {
    let client: Arc<dyn VisionClient + Send + Sync> = match &config.backend {
        Backend::Ollama { endpoint } => {
            let _ = logger.info(&format!("Using Ollama at {} with {}", endpoint, config.model));
            Arc::new(VisionClientOllama::new(
                endpoint,
                &config.model,
                config.request_timeout,
            )?)
        }
        Backend::OpenAi { endpoint, api_key } => {
            let _ = logger.info(&format!(
                "Using OpenAI-compatible endpoint {} with {}",
                endpoint, config.model
            ));
            Arc::new(VisionClientOpenAi::new(
                endpoint,
                api_key.as_deref(),
                &config.model,
                config.request_timeout,
            )?)
        }
        Backend::Fake => Arc::new(VisionClientFake::new(logger)),
    };

    Ok(client)
}
