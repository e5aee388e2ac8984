use std::collections::HashMap;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Settings read from `GAVRELEASE_*` environment variables.
pub struct GavReleaseConfig {
    pub rule_suffix: Option<String>,
    pub traversal_limit: Option<usize>,
}

impl GavReleaseConfig {
    pub fn load() -> anyhow::Result<Self> {
        let raw_config = RawConfig::load(None)?;

        Ok(Self {
            rule_suffix: raw_config.rule.suffix,
            traversal_limit: raw_config.traversal.limit,
        })
    }
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RawConfig {
    #[serde(default)]
    rule: RuleConfig,
    #[serde(default)]
    traversal: TraversalConfig,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct RuleConfig {
    suffix: Option<String>,
}

#[derive(Default, Debug, Deserialize, PartialEq, Eq)]
struct TraversalConfig {
    limit: Option<usize>,
}

impl RawConfig {
    fn load(env: Option<HashMap<String, String>>) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(
                Environment::with_prefix("GAVRELEASE")
                    .separator("_")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?
            .try_deserialize()
    }
}
