mod file_config;

pub use file_config::{ExtractorConfig, FileConfig};

use crate::keywords::{ExtractorKind, ExtractorSettings};
use crate::providers::{FREESOUND_API_BASE, PEXELS_API_BASE};
use crate::server::{RequestsLoggingLevel, ServerConfig};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,
    pub pexels_api_key: Option<String>,
    pub freesound_api_key: Option<String>,
    pub pexels_base_url: String,
    pub freesound_base_url: String,
    pub provider_timeout_sec: u64,
    pub extractor: ExtractorKind,
    pub max_input_chars: usize,
    pub stop_words_path: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            metrics_port: 9091,
            logging_level: RequestsLoggingLevel::default(),
            frontend_dir_path: None,
            pexels_api_key: None,
            freesound_api_key: None,
            pexels_base_url: PEXELS_API_BASE.to_string(),
            freesound_base_url: FREESOUND_API_BASE.to_string(),
            provider_timeout_sec: 30,
            extractor: ExtractorKind::default(),
            max_input_chars: 1000,
            stop_words_path: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    // Core settings
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub frontend_dir_path: Option<String>,

    // Media providers, a `None` key disables the provider
    pub pexels_api_key: Option<String>,
    pub freesound_api_key: Option<String>,
    pub pexels_base_url: String,
    pub freesound_base_url: String,
    pub provider_timeout_sec: u64,

    pub extractor: ExtractorSettings,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);
        if port == metrics_port {
            bail!("port and metrics_port must differ (both are {})", port);
        }

        let logging_level = match file.logging_level {
            Some(s) => match parse_logging_level(&s) {
                Some(level) => level,
                None => bail!("Unknown logging_level: {:?}", s),
            },
            None => cli.logging_level.clone(),
        };

        let frontend_dir_path = file
            .frontend_dir_path
            .or_else(|| cli.frontend_dir_path.clone());

        let pexels_api_key = non_empty(file.pexels_api_key.or_else(|| cli.pexels_api_key.clone()));
        let freesound_api_key =
            non_empty(file.freesound_api_key.or_else(|| cli.freesound_api_key.clone()));

        let pexels_base_url = file
            .pexels_base_url
            .unwrap_or_else(|| cli.pexels_base_url.clone());
        let freesound_base_url = file
            .freesound_base_url
            .unwrap_or_else(|| cli.freesound_base_url.clone());

        let provider_timeout_sec = file
            .provider_timeout_sec
            .unwrap_or(cli.provider_timeout_sec);
        if provider_timeout_sec == 0 {
            bail!("provider_timeout_sec must be greater than zero");
        }

        let extractor_file = file.extractor.unwrap_or_default();
        let kind = match extractor_file.kind {
            Some(s) => match ExtractorKind::from_str(&s, true) {
                Ok(kind) => kind,
                Err(_) => bail!("Unknown extractor kind: {:?}", s),
            },
            None => cli.extractor,
        };
        let max_input_chars = extractor_file
            .max_input_chars
            .unwrap_or(cli.max_input_chars);
        if max_input_chars == 0 {
            bail!("extractor max_input_chars must be greater than zero");
        }
        let stop_words_path = extractor_file
            .stop_words_path
            .map(PathBuf::from)
            .or_else(|| cli.stop_words_path.clone());

        Ok(Self {
            port,
            metrics_port,
            logging_level,
            frontend_dir_path,
            pexels_api_key,
            freesound_api_key,
            pexels_base_url,
            freesound_base_url,
            provider_timeout_sec,
            extractor: ExtractorSettings {
                kind,
                max_input_chars,
                stop_words_path,
            },
        })
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            frontend_dir_path: self.frontend_dir_path.clone(),
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}

fn non_empty(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}
