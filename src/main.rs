use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ambience_server::config;
use ambience_server::keywords::ExtractorKind;
use ambience_server::media::create_ambience_generator;
use ambience_server::providers::{FREESOUND_API_BASE, PEXELS_API_BASE};
use ambience_server::server::{metrics, run_server, RequestsLoggingLevel};

fn parse_path(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(|e| format!("Failed to get current dir: {}", e))?;
    Ok(cwd.join(path))
}

#[derive(Parser, Debug)]
struct CliArgs {
    /// Path to TOML configuration file. Values in the file override CLI arguments.
    #[clap(long, value_parser = parse_path)]
    pub config: Option<PathBuf>,

    /// The port to listen on.
    #[clap(short, long, default_value_t = 5000)]
    pub port: u16,

    /// The port for the metrics server (Prometheus scraping).
    #[clap(long, default_value_t = 9091)]
    pub metrics_port: u16,

    /// The level of logging to perform on each request.
    #[clap(long, default_value = "path")]
    pub logging_level: RequestsLoggingLevel,

    /// Path to the frontend directory to be statically served.
    #[clap(long)]
    pub frontend_dir_path: Option<String>,

    /// Pexels API key. Without it videos come from the curated table.
    #[clap(long, env = "PEXELS_API_KEY", hide_env_values = true)]
    pub pexels_api_key: Option<String>,

    /// Freesound API token. Without it the fallback audio clip is used.
    #[clap(long, env = "FREESOUND_API_KEY", hide_env_values = true)]
    pub freesound_api_key: Option<String>,

    /// Base URL of the Pexels API.
    #[clap(long, default_value = PEXELS_API_BASE)]
    pub pexels_base_url: String,

    /// Base URL of the Freesound API.
    #[clap(long, default_value = FREESOUND_API_BASE)]
    pub freesound_base_url: String,

    /// Timeout in seconds for media provider requests.
    #[clap(long, default_value_t = 30)]
    pub provider_timeout_sec: u64,

    /// Keyword extraction strategy.
    #[clap(long, default_value = "keyphrase")]
    pub extractor: ExtractorKind,

    /// Prompts longer than this (in characters) skip key-phrase extraction.
    #[clap(long, default_value_t = 1000)]
    pub max_input_chars: usize,

    /// Extra stop words, one per line.
    #[clap(long, value_parser = parse_path)]
    pub stop_words_path: Option<PathBuf>,
}

/// Convert CLI args to CliConfig for config resolution
impl From<&CliArgs> for config::CliConfig {
    fn from(args: &CliArgs) -> Self {
        config::CliConfig {
            port: args.port,
            metrics_port: args.metrics_port,
            logging_level: args.logging_level.clone(),
            frontend_dir_path: args.frontend_dir_path.clone(),
            pexels_api_key: args.pexels_api_key.clone(),
            freesound_api_key: args.freesound_api_key.clone(),
            pexels_base_url: args.pexels_base_url.clone(),
            freesound_base_url: args.freesound_base_url.clone(),
            provider_timeout_sec: args.provider_timeout_sec,
            extractor: args.extractor,
            max_input_chars: args.max_input_chars,
            stop_words_path: args.stop_words_path.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    // Load TOML config if provided
    let file_config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            Some(config::FileConfig::load(path)?)
        }
        None => None,
    };

    // Resolve final configuration (TOML overrides CLI)
    let cli_config: config::CliConfig = (&cli_args).into();
    let app_config = config::AppConfig::resolve(&cli_config, file_config)?;

    info!("Configuration loaded:");
    info!("  port: {}", app_config.port);
    info!("  extractor: {:?}", app_config.extractor.kind);
    info!("  pexels: {}", app_config.pexels_api_key.is_some());
    info!("  freesound: {}", app_config.freesound_api_key.is_some());

    info!("Initializing metrics...");
    metrics::init_metrics();

    let generator = Arc::new(create_ambience_generator(&app_config)?);

    tokio::select! {
        result = run_server(app_config.server_config(), generator) => {
            info!("HTTP server stopped: {:?}", result);
            result
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
            Ok(())
        }
    }
}
