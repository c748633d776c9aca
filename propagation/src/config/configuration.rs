use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

use crate::version::{ComparisonStrategy, VersionCompareType};

/// Prefix of environment variables overriding file configuration.
pub const ENV_PREFIX: &str = "PROPAGATION_";

#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VersionConfig {
    #[serde(default)]
    pub version_compare: VersionCompareType,
    pub log_level: Option<String>,
}

impl VersionConfig {
    pub fn comparison_strategy(&self) -> Arc<dyn ComparisonStrategy> {
        self.version_compare.strategy()
    }
}

/// Get configuration from 1. defaults, 2. an optional .yaml file and
/// 3. `PROPAGATION_` environment variables (later sources take precedence).
pub fn load_config(config_file: Option<&Path>) -> Result<VersionConfig> {
    let mut figment = Figment::from(Serialized::defaults(VersionConfig::default()));

    if let Some(path) = config_file {
        if !path.exists() {
            bail!("config file '{}' does not exist", path.display());
        }
        figment = figment.merge(Yaml::file(path));
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("invalid version comparison configuration")
}
