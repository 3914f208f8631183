//! Configuration loading for chairscope
//!
//! Everything here is an ambient knob with a compiled default; a run works
//! with no config file at all. Credentials and the venue id are deliberately
//! NOT part of the config — they are collected interactively at startup so
//! they never land on disk.

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Default platform API endpoint. Commitment sites hosted on the v2 API are
/// reached by overriding `base_url` in the config file.
pub const DEFAULT_BASE_URL: &str = "https://api.openreview.net";

/// Config file checked when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "chairscope.toml";

/// Tool configuration, loaded from TOML with per-field defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Platform API base URL
    pub base_url: String,

    /// A paper with at most this many completed reviews is "urgent"
    pub urgent_threshold: usize,

    /// Output path for the urgent-papers report
    pub urgent_papers_file: String,

    /// Output path for the recommendation export
    pub recommendation_file: String,

    /// Invitation suffix for the declared-maximum-load edge. Venues name this
    /// differently; `Custom_Max_Papers` is the common default.
    pub max_load_invitation: String,

    /// Submission numbers excluded from exports (program chair conflicts)
    pub coi_papers: Vec<u64>,

    /// Track group prefixes used by the commitment site's chair assignment
    /// groups (`{venue}/{track}_Area_Chairs`)
    pub track_groups: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            urgent_threshold: 2,
            urgent_papers_file: "urgent_papers.tsv".to_string(),
            recommendation_file: "sac_recommendation.tsv".to_string(),
            max_load_invitation: "Custom_Max_Papers".to_string(),
            coi_papers: Vec::new(),
            track_groups: default_track_groups(),
        }
    }
}

impl Config {
    /// Resolve configuration:
    /// 1. Explicit `--config` path (must exist and parse)
    /// 2. `./chairscope.toml` if present
    /// 3. Compiled defaults
    pub fn load(explicit_path: Option<&Path>) -> Result<Config> {
        if let Some(path) = explicit_path {
            let text = std::fs::read_to_string(path).map_err(|e| {
                Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
            })?;
            let config = Self::parse(&text)?;
            tracing::info!(path = %path.display(), "Loaded config file");
            return Ok(config);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            let text = std::fs::read_to_string(fallback)?;
            let config = Self::parse(&text)?;
            tracing::info!(path = %fallback.display(), "Loaded config file");
            return Ok(config);
        }

        tracing::debug!("No config file found, using compiled defaults");
        Ok(Config::default())
    }

    /// Parse TOML text into a Config
    pub fn parse(text: &str) -> Result<Config> {
        toml::from_str(text).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
    }
}

/// Standard research-track groups used by commitment sites. Overridable via
/// `track_groups` in the config file when a venue uses a different split.
fn default_track_groups() -> Vec<String> {
    [
        "Special_Theme",
        "Summarization",
        "Speech",
        "Sentiment",
        "Semantics_Sentence",
        "Semantics_Lexical",
        "Resources_Evaluation",
        "Question_Answering",
        "Phonology_Morphology",
        "Applications",
        "Multimodality",
        "Multilinguality",
        "Machine_Translation",
        "Machine_Learning",
        "Linguistic_Theories",
        "Interpretability",
        "Information_Retrieval",
        "Information_Extraction",
        "Generation",
        "Ethics",
        "Efficiency",
        "Discourse",
        "Dialogue",
        "Social_Science",
        "Syntax",
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
