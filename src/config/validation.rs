// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Configuration validation.
//!
//! Checks run in order and accumulate, so a user sees every problem at once:
//!
//! 1. **Non-empty**: at least one snippet is configured
//! 2. **Uniqueness**: every snippet ID appears once
//! 3. **Known kinds**: every `kind` is one the snippet factory can build
//!
//! Snippet options are not checked here; they are parsed when the snippet
//! is created.

use std::collections::HashSet;

use crate::config::Config;
use crate::errors::ValidationError;
use crate::observability::messages::config::{DuplicateSnippetId, UnknownSnippetKind};
use crate::observability::messages::StructuredLog;
use crate::snippets::SnippetFactory;

/// Validates a configuration before any snippet is built.
///
/// # Returns
///
/// * `Ok(())` - Configuration is valid
/// * `Err(Vec<ValidationError>)` - List of all validation errors found
///
/// # Examples
///
/// ```rust
/// use the_snippets::config::{validate_config, Config};
/// use the_snippets::errors::ValidationError;
///
/// let config = Config { snippets: vec![] };
/// assert_eq!(validate_config(&config), Err(vec![ValidationError::NoSnippets]));
/// ```
pub fn validate_config(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.snippets.is_empty() {
        errors.push(ValidationError::NoSnippets);
    }

    errors.extend(validate_unique_snippet_ids(config));
    errors.extend(validate_snippet_kinds(config));

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_unique_snippet_ids(config: &Config) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for snippet in &config.snippets {
        let id = snippet.id.as_str();
        if !seen.insert(id) && reported.insert(id) {
            DuplicateSnippetId { snippet_id: id }.log();
            errors.push(ValidationError::DuplicateSnippetId {
                snippet_id: id.to_string(),
            });
        }
    }

    errors
}

fn validate_snippet_kinds(config: &Config) -> Vec<ValidationError> {
    config
        .snippets
        .iter()
        .filter(|snippet| !SnippetFactory::is_kind_available(&snippet.kind))
        .map(|snippet| {
            UnknownSnippetKind {
                snippet_id: &snippet.id,
                kind: &snippet.kind,
            }
            .log();
            ValidationError::UnknownSnippetKind {
                snippet_id: snippet.id.clone(),
                kind: snippet.kind.clone(),
            }
        })
        .collect()
}
