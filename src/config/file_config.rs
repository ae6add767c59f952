use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI)
    pub port: Option<u16>,
    pub metrics_port: Option<u16>,
    pub logging_level: Option<String>,
    pub frontend_dir_path: Option<String>,

    // Media providers
    pub pexels_api_key: Option<String>,
    pub freesound_api_key: Option<String>,
    pub pexels_base_url: Option<String>,
    pub freesound_base_url: Option<String>,
    pub provider_timeout_sec: Option<u64>,

    pub extractor: Option<ExtractorConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Extraction strategy: "keyphrase" or "simple"
    pub kind: Option<String>,
    pub max_input_chars: Option<usize>,
    pub stop_words_path: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
