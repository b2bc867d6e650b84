use crate::config::{Backend, Config};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_OLLAMA_ENDPOINT: &str = "http://localhost:11434";

#[derive(Parser, Debug)]
#[command(
    name = "trailcam-sorter",
    version,
    about = "Sort trail camera images and videos into folders by quality and animal"
)]
pub struct Cli {
    #[arg(long, help = "Directory of images/videos to sort")]
    pub dir: PathBuf,

    #[arg(long, default_value = "llava:latest", help = "Multimodal model to use")]
    pub model: String,

    #[arg(
        long = "max-width",
        alias = "maxW",
        default_value_t = 1200,
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Max width for frames sent to the model"
    )]
    pub max_width: u32,

    #[arg(
        long,
        default_value = "Michigan",
        help = "Region to mention in the classification prompt"
    )]
    pub region: String,

    #[arg(long, value_enum, default_value_t = BackendChoice::Auto)]
    pub backend: BackendChoice,

    #[arg(long, env = "OLLAMA_HOST", help = "Ollama endpoint URL")]
    pub ollama_endpoint: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL", help = "OpenAI-compatible endpoint URL")]
    pub openai_endpoint: Option<String>,

    #[arg(
        long,
        env = "OPENAI_API_KEY",
        hide_env_values = true,
        help = "API key for the OpenAI-compatible endpoint"
    )]
    pub openai_key: Option<String>,

    #[arg(long, default_value_t = 120, help = "Per-request timeout in seconds")]
    pub request_timeout_secs: u64,

    #[arg(long, help = "Log what would be moved without touching any file")]
    pub dry_run: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendChoice {
    /// OpenAI-compatible when an OpenAI endpoint is set, otherwise Ollama
    Auto,
    Ollama,
    Openai,
    Fake,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("--backend openai needs --openai-endpoint or OPENAI_BASE_URL")]
    MissingOpenAiEndpoint,
}

impl Cli {
    pub fn into_config(self) -> Result<Config, CliError> {
        let backend = resolve_backend(
            self.backend,
            self.ollama_endpoint.as_deref(),
            self.openai_endpoint.as_deref(),
            self.openai_key.as_deref(),
        )?;

        Ok(Config {
            backend,
            model: self.model,
            region: self.region,
            max_width: self.max_width,
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            dry_run: self.dry_run,
            ..Config::default()
        })
    }
}

pub fn resolve_backend(
    choice: BackendChoice,
    ollama_endpoint: Option<&str>,
    openai_endpoint: Option<&str>,
    openai_key: Option<&str>,
) -> Result<Backend, CliError> {
    let ollama_endpoint = non_empty(ollama_endpoint);
    let openai_endpoint = non_empty(openai_endpoint);

    let ollama = || Backend::Ollama {
        endpoint: ollama_endpoint
            .unwrap_or(DEFAULT_OLLAMA_ENDPOINT)
            .to_string(),
    };

    match (choice, openai_endpoint) {
        (BackendChoice::Fake, _) => Ok(Backend::Fake),
        (BackendChoice::Ollama, _) | (BackendChoice::Auto, None) => Ok(ollama()),
        (BackendChoice::Openai, None) => Err(CliError::MissingOpenAiEndpoint),
        (BackendChoice::Openai | BackendChoice::Auto, Some(endpoint)) => Ok(Backend::OpenAi {
            endpoint: endpoint.to_string(),
            api_key: non_empty(openai_key).map(str::to_string),
        }),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("trailcam-sorter").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--dir", "./cam"]);

        assert_eq!(cli.dir, PathBuf::from("./cam"));
        assert_eq!(cli.model, "llava:latest");
        assert_eq!(cli.max_width, 1200);
        assert_eq!(cli.region, "Michigan");
        assert_eq!(cli.backend, BackendChoice::Auto);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_flags() {
        let cli = parse(&[
            "--dir",
            "./cam",
            "--model",
            "gpt-4o-mini",
            "--maxW",
            "800",
            "--region",
            "Ontario",
            "--backend",
            "fake",
            "--request-timeout-secs",
            "5",
            "--dry-run",
        ]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_width, 800);
        assert_eq!(config.region, "Ontario");
        assert_eq!(config.backend, Backend::Fake);
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(config.dry_run);
    }

    #[test]
    fn test_dir_is_required() {
        assert!(Cli::try_parse_from(["trailcam-sorter"]).is_err());
    }

    #[test]
    fn test_zero_width_is_rejected() {
        assert!(Cli::try_parse_from(["trailcam-sorter", "--dir", ".", "--max-width", "0"]).is_err());
    }

    #[test]
    fn test_auto_prefers_openai_when_configured() {
        let backend = resolve_backend(
            BackendChoice::Auto,
            Some("ollama:11434"),
            Some("https://api.example.com/v1"),
            Some("sk-test"),
        )
        .unwrap();

        assert_eq!(
            backend,
            Backend::OpenAi {
                endpoint: "https://api.example.com/v1".to_string(),
                api_key: Some("sk-test".to_string()),
            }
        );
    }

    #[test]
    fn test_auto_falls_back_to_ollama() {
        let backend = resolve_backend(BackendChoice::Auto, None, Some("  "), None).unwrap();

        assert_eq!(
            backend,
            Backend::Ollama {
                endpoint: DEFAULT_OLLAMA_ENDPOINT.to_string()
            }
        );
    }

    #[test]
    fn test_explicit_ollama_ignores_openai() {
        let backend = resolve_backend(
            BackendChoice::Ollama,
            Some("10.0.0.2:11434"),
            Some("https://api.example.com/v1"),
            None,
        )
        .unwrap();

        assert_eq!(
            backend,
            Backend::Ollama {
                endpoint: "10.0.0.2:11434".to_string()
            }
        );
    }

    #[test]
    fn test_openai_requires_endpoint() {
        assert_eq!(
            resolve_backend(BackendChoice::Openai, None, None, Some("sk")),
            Err(CliError::MissingOpenAiEndpoint)
        );
    }
}
