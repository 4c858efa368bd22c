// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;

use crate::config::Config;
use crate::errors::SnippetMapError;
use crate::observability::messages::snippet::SnippetInstantiationFailed;
use crate::observability::messages::StructuredLog;
use crate::snippets::SnippetFactory;
use crate::traits::Snippet;

/// A registry mapping snippet IDs to their implementations, in config order.
///
/// # Example
/// ```
/// use the_snippets::config::{Config, SnippetMap};
///
/// let snippets = SnippetMap::from_config(&Config::default()).unwrap();
///
/// let ids: Vec<&str> = snippets.keys().map(String::as_str).collect();
/// assert_eq!(ids, vec!["decorators", "anonymous_functions", "oop"]);
/// assert_eq!(snippets.get("oop").map(|s| s.name()), Some("race_car"));
/// ```
pub struct SnippetMap(IndexMap<String, Box<dyn Snippet>>);

impl SnippetMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Build every configured snippet through the [`SnippetFactory`].
    ///
    /// Fails on the first snippet that cannot be created.
    pub fn from_config(cfg: &Config) -> Result<Self, SnippetMapError> {
        let mut snippets = IndexMap::new();

        for snippet_config in &cfg.snippets {
            match SnippetFactory::create_snippet(snippet_config) {
                Ok(snippet) => {
                    snippets.insert(snippet_config.id.clone(), snippet);
                }
                Err(e) => {
                    SnippetInstantiationFailed {
                        snippet_id: &snippet_config.id,
                        kind: &snippet_config.kind,
                        reason: &e.to_string(),
                    }
                    .log();
                    return Err(e);
                }
            }
        }

        Ok(Self(snippets))
    }

    pub fn get(&self, id: &str) -> Option<&dyn Snippet> {
        self.0.get(id).map(|snippet| snippet.as_ref())
    }

    pub fn insert(&mut self, id: String, snippet: Box<dyn Snippet>) -> Option<Box<dyn Snippet>> {
        self.0.insert(id, snippet)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Box<dyn Snippet>)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for SnippetMap {
    fn default() -> Self {
        Self::new()
    }
}
