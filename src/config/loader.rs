// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::observability::messages::{config::ConfigLoaded, StructuredLog};

/// Main configuration structure for a showcase run.
///
/// Lists the snippets to run, in the order they should run. It is
/// typically loaded from a YAML file; [`Config::default`] runs every
/// snippet once with its built-in defaults.
///
/// # Example
/// ```yaml
/// snippets:
///   - id: decorators
///     kind: decorators
///     options:
///       names: [World]
///   - id: car
///     kind: race_car
///     options:
///       color: red
///       fuel_remaining: 10
///       extras: { speed: 200 }
///       laps: [4, 4, 4]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub snippets: Vec<SnippetConfig>,
}

impl Default for Config {
    fn default() -> Self {
        let snippet = |id: &str, kind: &str| SnippetConfig {
            id: id.to_string(),
            kind: kind.to_string(),
            options: HashMap::new(),
        };

        Self {
            snippets: vec![
                snippet("decorators", "decorators"),
                snippet("anonymous_functions", "anonymous_functions"),
                snippet("oop", "race_car"),
            ],
        }
    }
}

/// Configuration for a single snippet.
///
/// # Fields
/// * `id` - Unique identifier for this snippet within the config
/// * `kind` - Which snippet to build (see `SnippetFactory::list_available_kinds`)
/// * `options` - Snippet-specific settings; omitted keys use the snippet's defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnippetConfig {
    pub id: String,
    pub kind: String,
    #[serde(default)]
    pub options: HashMap<String, serde_yaml::Value>,
}

/// Load a config from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path.as_ref())?;
    let cfg: Config = serde_yaml::from_str(&content)?;

    ConfigLoaded {
        path: &path.as_ref().display().to_string(),
        snippet_count: cfg.snippets.len(),
    }
    .log();

    Ok(cfg)
}

/// Load and validate a config from a YAML file
///
/// Every validation problem is reported at once rather than stopping at
/// the first.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let cfg = load_config(path)?;
    crate::config::validate_config(&cfg).map_err(ConfigError::Invalid)?;
    Ok(cfg)
}
