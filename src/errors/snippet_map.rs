// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for snippet map creation and snippet instantiation.

use thiserror::Error;

use crate::errors::SnippetError;

/// Errors that can occur during snippet map creation
#[derive(Error, Debug)]
pub enum SnippetMapError {
    /// The configured kind is not one the factory knows about
    #[error("Unknown snippet kind '{kind}' for snippet '{snippet_id}'")]
    UnknownKind { snippet_id: String, kind: String },

    /// Failed to create a snippet from configuration
    #[error("Failed to create snippet '{snippet_id}': {source}")]
    CreationFailed {
        snippet_id: String,
        #[source]
        source: SnippetError,
    },
}
