// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by snippets and the attribute layer they share.

use thiserror::Error;

/// Failures raised while building or running a snippet.
///
/// The snippet semantics themselves never fail: a wrapped callable's error
/// travels back to the caller untouched and a lap never checks the fuel
/// level. These variants cover the surfaces around them, namely attribute
/// lookup on dynamically-attributed entities, option parsing and writing
/// output.
#[derive(Error, Debug)]
pub enum SnippetError {
    /// The entity has no attribute with this name.
    #[error("'{entity}' object has no attribute '{name}'")]
    MissingAttribute { entity: &'static str, name: String },

    /// A fixed attribute was assigned a value of the wrong type.
    #[error("attribute '{name}' expects {expected}, got {found}")]
    AttributeType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Integer arithmetic left the `i64` range.
    #[error("integer overflow evaluating {expression}")]
    Overflow { expression: String },

    /// A float that has to stay finite became infinite or NaN.
    #[error("attribute '{name}' must be finite, got {value}")]
    NonFinite { name: String, value: f64 },

    /// Snippet options could not be interpreted.
    #[error("Invalid options for snippet '{snippet}': {reason}")]
    InvalidOptions { snippet: String, reason: String },

    #[error("Failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}
