use serde::Deserialize;
use tracing::level_filters::{LevelFilter, ParseLevelFilterError};

const ENV_PREFIX: &str = "COLLKIT_";

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Demo inputs, read from `COLLKIT_*` environment variables.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct DemoConfig {
    #[serde(default = "default_sequence")]
    pub sequence: Vec<i64>,
    #[serde(default = "default_k")]
    pub k: usize,
    #[serde(default = "default_text")]
    pub text: String,
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_sequence() -> Vec<i64> {
    vec![7, 10, 4, 3, 20, 15]
}

fn default_k() -> usize {
    3
}

fn default_text() -> String {
    "Java is great and Java is fun Java".to_owned()
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_log_level() -> String {
    "info".to_owned()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sequence: default_sequence(),
            k: default_k(),
            text: default_text(),
            format: default_format(),
            log_level: default_log_level(),
        }
    }
}

impl DemoConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed(ENV_PREFIX).from_env::<DemoConfig>()
    }

    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX).from_iter(vars)
    }

    pub fn max_level(&self) -> Result<LevelFilter, ParseLevelFilterError> {
        self.log_level.parse()
    }
}
