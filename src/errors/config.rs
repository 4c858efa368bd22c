// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors that can occur during showcase configuration validation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The configuration lists no snippets at all
    #[error("Configuration contains no snippets")]
    NoSnippets,

    /// Two snippets share the same ID
    #[error("Duplicate snippet ID: '{snippet_id}'")]
    DuplicateSnippetId {
        /// The duplicate snippet ID
        snippet_id: String,
    },

    /// A snippet names a kind the factory cannot build
    #[error("Snippet '{snippet_id}' has unknown kind '{kind}'")]
    UnknownSnippetKind {
        /// The snippet with the unknown kind
        snippet_id: String,
        /// The kind that couldn't be resolved
        kind: String,
    },
}

/// Errors raised while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
