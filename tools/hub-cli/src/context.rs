//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use hub_core::content::ContentLibrary;
use hub_core::CreatorStore;
use hub_fetch::{FetchClient, ReqwestTransport};
use hub_observability::{CorrelationId, StructuredLogger};

use crate::config::HubConfig;
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    pub config: HubConfig,
    /// File the config came from, if any.
    pub config_path: Option<PathBuf>,
    pub output: Output,
    pub logger: StructuredLogger,
    pub cwd: PathBuf,
}

impl Context {
    /// Load context, reading `config_path` or discovering a config file from
    /// the working directory upwards.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve(&cwd, path);
                (HubConfig::load(&path)?, Some(path))
            }
            None => match HubConfig::discover(&cwd)? {
                Some((config, path)) => (config, Some(path)),
                None => (HubConfig::default(), None),
            },
        };

        let min_level = if output.is_verbose() {
            hub_observability::LogLevel::Debug
        } else {
            config.logging.level
        };
        let logger = StructuredLogger::new(CorrelationId::generate())
            .with_min_level(min_level)
            .with_format(config.logging.format);

        Ok(Self {
            config,
            config_path,
            output,
            logger,
            cwd,
        })
    }

    /// The creator store: the configured dataset, or the bundled one.
    pub fn store(&self) -> Result<CreatorStore> {
        match &self.config.directory.dataset {
            Some(dataset) => {
                let path = self.resolve_path(dataset);
                self.output
                    .debug(&format!("Loading dataset: {}", path.display()));
                CreatorStore::from_path(&path)
                    .with_context(|| format!("Failed to load dataset: {}", path.display()))
            }
            None => CreatorStore::bundled().context("Bundled creator dataset is invalid"),
        }
    }

    pub fn content(&self) -> Result<ContentLibrary> {
        ContentLibrary::bundled().context("Bundled content is invalid")
    }

    /// HTTP client honoring the configured timeout.
    pub fn fetch_client(&self) -> Result<FetchClient> {
        let timeout = Duration::from_secs(self.config.forms.timeout_secs);
        let transport =
            ReqwestTransport::with_timeout(timeout).context("Failed to build HTTP client")?;
        Ok(FetchClient::with_transport(Arc::new(transport)))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        resolve(&self.cwd, path)
    }
}

fn resolve(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
