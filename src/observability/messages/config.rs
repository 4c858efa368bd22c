// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for configuration loading and validation events.

use std::fmt::{Display, Formatter};

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// Configuration loaded from disk.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct ConfigLoaded<'a> {
    pub path: &'a str,
    pub snippet_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded config '{}' with {} snippets",
            self.path, self.snippet_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            path = self.path,
            snippet_count = self.snippet_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("config", span_name = name, path = self.path)
    }
}

/// Duplicate snippet ID detected in configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_snippets::observability::messages::config::DuplicateSnippetId;
///
/// let msg = DuplicateSnippetId { snippet_id: "car" };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DuplicateSnippetId<'a> {
    pub snippet_id: &'a str,
}

impl Display for DuplicateSnippetId<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Duplicate snippet ID: '{}'", self.snippet_id)
    }
}

impl StructuredLog for DuplicateSnippetId<'_> {
    fn log(&self) {
        tracing::error!(snippet_id = self.snippet_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            snippet_id = self.snippet_id,
        )
    }
}

/// Unknown snippet kind referenced in configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnknownSnippetKind<'a> {
    pub snippet_id: &'a str,
    pub kind: &'a str,
}

impl Display for UnknownSnippetKind<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Snippet '{}' references unknown kind '{}'",
            self.snippet_id, self.kind
        )
    }
}

impl StructuredLog for UnknownSnippetKind<'_> {
    fn log(&self) {
        tracing::error!(
            snippet_id = self.snippet_id,
            kind = self.kind,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            snippet_id = self.snippet_id,
            kind = self.kind,
        )
    }
}
