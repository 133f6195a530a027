//! navctl configuration file

use anyhow::Context;
use nav_engine::{NavigatorConfig, UnknownKeyPolicy};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Log filter used when neither `RUST_LOG` nor the config file sets one
pub(crate) const DEFAULT_LOG_FILTER: &str = "warn";

/// Contents of the `--config` TOML file; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct CliConfig {
    pub(crate) log_filter: Option<String>,
    pub(crate) unknown_key_policy: UnknownKeyPolicy,
    pub(crate) catalog: Option<PathBuf>,
    pub(crate) graph: Option<PathBuf>,
    pub(crate) start: Option<String>,
}

impl CliConfig {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub(crate) fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub(crate) fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub(crate) fn navigator(&self) -> NavigatorConfig {
        NavigatorConfig::new().with_unknown_key_policy(self.unknown_key_policy)
    }
}
