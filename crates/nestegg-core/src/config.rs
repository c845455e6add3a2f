//! Configuration for targets and engine policies
//!
//! ## Configuration Resolution
//!
//! Config is loaded with a two-layer resolution:
//! 1. An explicit path, or the override in the data dir
//!    (~/.local/share/nestegg/config/nestegg.toml)
//! 2. Fall back to embedded defaults (compiled into binary)
//!
//! Keys missing from an override keep their default values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::ScoreTargets;
use crate::score::{EngineOptions, Validation, ZeroTargetPolicy};

/// Embedded default config (compiled into binary)
const DEFAULT_CONFIG: &str = include_str!("../../../config/nestegg.toml");

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Embedded,
    File(PathBuf),
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Embedded => write!(f, "(embedded defaults)"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Engine policy settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EngineConfig {
    pub zero_target: ZeroTargetPolicy,
    pub strict: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub targets: ScoreTargets,
    pub engine: EngineConfig,
    pub source: ConfigSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            targets: ScoreTargets::default(),
            engine: EngineConfig::default(),
            source: ConfigSource::Embedded,
        }
    }
}

impl Config {
    /// Load from `path` if given and present, else the data dir override,
    /// else the embedded defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let candidate = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        let config = match candidate {
            Some(p) if p.exists() => {
                let content = fs::read_to_string(&p).map_err(|e| {
                    Error::Config(format!("Failed to read {}: {}", p.display(), e))
                })?;
                let mut config = parse_config(&content)?;
                config.source = ConfigSource::File(p);
                config
            }
            _ => parse_config(DEFAULT_CONFIG)?,
        };

        tracing::debug!(
            source = %config.source,
            monthly_spend = ?config.targets.monthly_spend,
            zero_target = config.engine.zero_target.as_str(),
            strict = config.engine.strict,
            "Loaded config"
        );

        Ok(config)
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            zero_target: self.engine.zero_target,
            validation: if self.engine.strict {
                Validation::Strict
            } else {
                Validation::Off
            },
        }
    }

    /// Fill targets the snapshot leaves unset from this config
    pub fn merge_targets(&self, snapshot: ScoreTargets) -> ScoreTargets {
        ScoreTargets {
            monthly_spend: snapshot.monthly_spend.or(self.targets.monthly_spend),
        }
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String> {
        #[derive(Serialize)]
        struct Out<'a> {
            targets: &'a ScoreTargets,
            engine: &'a EngineConfig,
        }

        toml::to_string_pretty(&Out {
            targets: &self.targets,
            engine: &self.engine,
        })
        .map_err(|e| Error::Config(format!("Failed to render config: {}", e)))
    }
}

/// Default config override path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("nestegg").join("config").join("nestegg.toml"))
}

/// Raw config structure for TOML parsing
#[derive(Debug, Deserialize)]
struct RawConfig {
    targets: Option<RawTargets>,
    engine: Option<RawEngine>,
}

#[derive(Debug, Deserialize)]
struct RawTargets {
    monthly_spend: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawEngine {
    zero_target: Option<String>,
    strict: Option<bool>,
}

/// Parse config from TOML content
fn parse_config(content: &str) -> Result<Config> {
    let raw: RawConfig = toml::from_str(content)
        .map_err(|e| Error::Config(format!("Invalid config TOML: {}", e)))?;

    let mut config = Config::default();

    if let Some(targets) = raw.targets {
        if let Some(monthly) = targets.monthly_spend {
            config.targets.monthly_spend = Some(monthly);
        }
    }

    if let Some(engine) = raw.engine {
        if let Some(policy) = engine.zero_target {
            config.engine.zero_target = policy.parse().map_err(Error::Config)?;
        }
        if let Some(strict) = engine.strict {
            config.engine.strict = strict;
        }
    }

    Ok(config)
}
