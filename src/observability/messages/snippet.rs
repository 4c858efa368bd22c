// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for snippet run lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Snippet instantiation from configuration
//! * Snippet run lifecycle (start, completion, failure)

use std::fmt::{Display, Formatter};
use std::time::Duration;

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// Snippet run started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_snippets::observability::messages::snippet::SnippetRunStarted;
///
/// let msg = SnippetRunStarted {
///     snippet_id: "car",
///     kind: "race_car",
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct SnippetRunStarted<'a> {
    pub snippet_id: &'a str,
    pub kind: &'a str,
}

impl Display for SnippetRunStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Snippet '{}' ({}) started", self.snippet_id, self.kind)
    }
}

impl StructuredLog for SnippetRunStarted<'_> {
    fn log(&self) {
        tracing::info!(
            snippet_id = self.snippet_id,
            kind = self.kind,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "snippet",
            span_name = name,
            snippet_id = self.snippet_id,
            kind = self.kind,
        )
    }
}

/// Snippet run completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use the_snippets::observability::messages::snippet::SnippetRunCompleted;
/// use std::time::Duration;
///
/// let msg = SnippetRunCompleted {
///     snippet_id: "car",
///     output_size: 64,
///     duration: Duration::from_millis(1),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct SnippetRunCompleted<'a> {
    pub snippet_id: &'a str,
    pub output_size: usize,
    pub duration: Duration,
}

impl Display for SnippetRunCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Snippet '{}' completed: output={} bytes, duration={:?}",
            self.snippet_id, self.output_size, self.duration
        )
    }
}

impl StructuredLog for SnippetRunCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            snippet_id = self.snippet_id,
            output_size = self.output_size,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "snippet",
            span_name = name,
            snippet_id = self.snippet_id,
        )
    }
}

/// Snippet run failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use the_snippets::observability::messages::snippet::SnippetRunFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdout closed");
/// let msg = SnippetRunFailed {
///     snippet_id: "car",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct SnippetRunFailed<'a> {
    pub snippet_id: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for SnippetRunFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Snippet '{}' failed: {}", self.snippet_id, self.error)
    }
}

impl StructuredLog for SnippetRunFailed<'_> {
    fn log(&self) {
        tracing::error!(
            snippet_id = self.snippet_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "snippet",
            span_name = name,
            snippet_id = self.snippet_id,
        )
    }
}

/// Snippet instantiation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct SnippetInstantiationFailed<'a> {
    pub snippet_id: &'a str,
    pub kind: &'a str,
    pub reason: &'a str,
}

impl Display for SnippetInstantiationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to instantiate snippet '{}' of kind '{}': {}",
            self.snippet_id, self.kind, self.reason
        )
    }
}

impl StructuredLog for SnippetInstantiationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            snippet_id = self.snippet_id,
            kind = self.kind,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "snippet",
            span_name = name,
            snippet_id = self.snippet_id,
            kind = self.kind,
        )
    }
}
