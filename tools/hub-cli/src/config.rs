//! CLI configuration.

use std::path::Path;

use anyhow::{Context, Result};
use hub_core::directory::SortMode;
use hub_core::forms::DEFAULT_ONBOARDING_ENDPOINT;
use hub_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

/// File names looked for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["hub.toml", ".hub.toml", "hub.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HubConfig {
    #[serde(default)]
    pub directory: DirectoryConfig,

    #[serde(default)]
    pub forms: FormsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl HubConfig {
    /// Load config from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Walk up from `start` and load the first config file found.
    pub fn discover(start: &Path) -> Result<Option<(Self, std::path::PathBuf)>> {
        for dir in start.ancestors() {
            for name in CONFIG_NAMES {
                let path = dir.join(name);
                if path.is_file() {
                    return Ok(Some((Self::load(&path)?, path)));
                }
            }
        }
        Ok(None)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// `[directory]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DirectoryConfig {
    /// Alternate creators JSON; the bundled dataset is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,

    #[serde(default)]
    pub default_sort: SortMode,

    /// How many creators `hub top` shows by default.
    #[serde(default = "default_top_creators")]
    pub top_creators: usize,
}

fn default_top_creators() -> usize {
    5
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            default_sort: SortMode::Sales,
            top_creators: default_top_creators(),
        }
    }
}

/// `[forms]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormsConfig {
    #[serde(default = "default_endpoint")]
    pub onboarding_endpoint: String,

    /// Request timeout for webhook submissions, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ONBOARDING_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            onboarding_endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> LogLevel {
    LogLevel::Warn
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::Human,
        }
    }
}

/// Contents written by `hub config init`.
pub fn generate_default_config() -> String {
    format!(
        r#"# Affiliate Hub CLI configuration

[directory]
# dataset = "creators.json"
default_sort = "sales"
top_creators = 5

[forms]
onboarding_endpoint = "{endpoint}"
timeout_secs = 15

[logging]
level = "warn"
format = "human"
"#,
        endpoint = DEFAULT_ONBOARDING_ENDPOINT
    )
}
