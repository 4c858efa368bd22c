// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::de::DeserializeOwned;

use crate::config::SnippetConfig;
use crate::errors::{SnippetError, SnippetMapError};
use crate::traits::Snippet;
use super::*;

/// Factory for creating snippet instances
pub struct SnippetFactory;

impl SnippetFactory {
    /// Create a snippet instance from configuration
    ///
    /// The `kind` field in the config determines which snippet to create:
    /// - "decorators" -> DecoratorsSnippet
    /// - "anonymous_functions" -> AnonymousFunctionsSnippet
    /// - "race_car" -> RaceCarSnippet
    ///
    /// The snippet's `options` are parsed into that snippet's config type;
    /// anything left out falls back to the defaults.
    pub fn create_snippet(config: &SnippetConfig) -> Result<Box<dyn Snippet>, SnippetMapError> {
        let creation_failed = |source| SnippetMapError::CreationFailed {
            snippet_id: config.id.clone(),
            source,
        };

        match config.kind.as_str() {
            "decorators" => {
                let options = parse_options(config).map_err(creation_failed)?;
                Ok(Box::new(DecoratorsSnippet::new(options)))
            }
            "anonymous_functions" => {
                let options = parse_options(config).map_err(creation_failed)?;
                Ok(Box::new(AnonymousFunctionsSnippet::new(options)))
            }
            "race_car" => {
                let options = parse_options(config).map_err(creation_failed)?;
                let snippet = RaceCarSnippet::new(options).map_err(creation_failed)?;
                Ok(Box::new(snippet))
            }
            _ => Err(SnippetMapError::UnknownKind {
                snippet_id: config.id.clone(),
                kind: config.kind.clone(),
            }),
        }
    }

    /// List all available snippet kinds
    pub fn list_available_kinds() -> Vec<&'static str> {
        vec!["decorators", "anonymous_functions", "race_car"]
    }

    /// Check if a kind is available
    pub fn is_kind_available(kind: &str) -> bool {
        Self::list_available_kinds().contains(&kind)
    }
}

fn parse_options<T: DeserializeOwned>(config: &SnippetConfig) -> Result<T, SnippetError> {
    let mapping: serde_yaml::Mapping = config
        .options
        .iter()
        .map(|(key, value)| (serde_yaml::Value::String(key.clone()), value.clone()))
        .collect();

    serde_yaml::from_value(serde_yaml::Value::Mapping(mapping)).map_err(|e| {
        SnippetError::InvalidOptions {
            snippet: config.id.clone(),
            reason: e.to_string(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn create_test_config(id: &str, kind: &str) -> SnippetConfig {
        SnippetConfig {
            id: id.to_string(),
            kind: kind.to_string(),
            options: HashMap::new(),
        }
    }

    fn with_options(mut config: SnippetConfig, yaml: &str) -> SnippetConfig {
        config.options = serde_yaml::from_str(yaml).unwrap();
        config
    }

    fn run(snippet: &dyn Snippet) -> String {
        let mut out = Vec::new();
        snippet.run(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_create_every_kind_with_defaults() {
        for kind in SnippetFactory::list_available_kinds() {
            let config = create_test_config("test", kind);
            let snippet = SnippetFactory::create_snippet(&config)
                .unwrap_or_else(|e| panic!("Failed to create snippet {}: {}", kind, e));
            assert_eq!(snippet.name(), kind);
        }
    }

    #[test]
    fn test_options_override_defaults() {
        let config = with_options(
            create_test_config("lambdas", "anonymous_functions"),
            "{ authors: [Bob Zed, Ann Lee], inputs: [2] }",
        );
        let snippet = SnippetFactory::create_snippet(&config).unwrap();

        assert_eq!(run(snippet.as_ref()), "Normal function:  9\n['Ann Lee', 'Bob Zed']\n9\n");
    }

    #[test]
    fn test_race_car_extras_from_yaml() {
        let config = with_options(
            create_test_config("car", "race_car"),
            "{ color: blue, fuel_remaining: 2, extras: { speed: 150, driver: Mach }, laps: [8] }",
        );
        let snippet = SnippetFactory::create_snippet(&config).unwrap();

        assert_eq!(
            run(snippet.as_ref()),
            "color = 'blue'\nfuel_remaining = 1.0\nlaps = 1\nspeed = 150\ndriver = 'Mach'\n"
        );
    }

    #[test]
    fn test_unknown_option_is_rejected() {
        let config = with_options(create_test_config("deco", "decorators"), "{ nmes: [x] }");

        let err = SnippetFactory::create_snippet(&config).err().unwrap();
        assert!(matches!(
            err,
            SnippetMapError::CreationFailed {
                source: SnippetError::InvalidOptions { .. },
                ..
            }
        ));
        assert!(err.to_string().contains("Failed to create snippet 'deco'"));
    }

    #[test]
    fn test_mistyped_race_car_extra_is_rejected() {
        let config = with_options(
            create_test_config("car", "race_car"),
            "{ extras: { laps: -2 } }",
        );

        let err = SnippetFactory::create_snippet(&config).err().unwrap();
        assert!(matches!(
            err,
            SnippetMapError::CreationFailed {
                source: SnippetError::AttributeType { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_create_snippet_unknown_kind() {
        let config = create_test_config("test", "metaclasses");

        let err = SnippetFactory::create_snippet(&config).err().unwrap();
        assert_eq!(
            err.to_string(),
            "Unknown snippet kind 'metaclasses' for snippet 'test'"
        );
    }

    #[test]
    fn test_is_kind_available() {
        assert!(SnippetFactory::is_kind_available("race_car"));
        assert!(SnippetFactory::is_kind_available("decorators"));
        assert!(!SnippetFactory::is_kind_available("metaclasses"));
    }

    fn run_err(snippet: &dyn Snippet) -> SnippetError {
        let mut out = Vec::new();
        snippet.run(&mut out).unwrap_err()
    }

    #[test]
    fn test_oversized_compute_input_from_yaml() {
        let config = with_options(
            create_test_config("lambdas", "anonymous_functions"),
            "{ compute_input: 9223372036854775807 }",
        );
        let snippet = SnippetFactory::create_snippet(&config).unwrap();

        assert!(matches!(run_err(snippet.as_ref()), SnippetError::Overflow { .. }));
    }

    #[test]
    fn test_oversized_quadratic_input_from_yaml() {
        let config = with_options(
            create_test_config("lambdas", "anonymous_functions"),
            "{ inputs: [4000000000] }",
        );
        let snippet = SnippetFactory::create_snippet(&config).unwrap();

        assert!(matches!(run_err(snippet.as_ref()), SnippetError::Overflow { .. }));
    }

    #[test]
    fn test_lap_count_beyond_u32_from_yaml() {
        let config = with_options(
            create_test_config("car", "race_car"),
            "{ extras: { laps: 4294967295 }, laps: [1] }",
        );
        let snippet = SnippetFactory::create_snippet(&config).unwrap();

        assert!(run(snippet.as_ref()).contains("laps = 4294967296\n"));
    }

    #[test]
    fn test_infinite_lap_length_from_yaml() {
        let config = with_options(
            create_test_config("car", "race_car"),
            "{ laps: [.inf], json: true }",
        );

        let err = SnippetFactory::create_snippet(&config).err().unwrap();
        assert!(matches!(
            err,
            SnippetMapError::CreationFailed {
                source: SnippetError::NonFinite { .. },
                ..
            }
        ));
    }
}
