// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;
use std::time::Instant;

use crate::config::consts::SEPARATOR_WIDTH;
use crate::config::{Config, SnippetMap};
use crate::errors::{SnippetError, SnippetMapError};
use crate::observability::messages::snippet::{SnippetRunCompleted, SnippetRunFailed, SnippetRunStarted};
use crate::observability::messages::StructuredLog;

/// Runs a set of snippets one after another.
///
/// # Example
/// ```
/// use the_snippets::config::{Config, Showcase};
///
/// let showcase = Showcase::from_config(&Config::default()).unwrap();
///
/// let mut out = Vec::new();
/// showcase.run(&mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("'My name'\n"));
/// assert!(text.ends_with("speed = 200\n"));
/// ```
pub struct Showcase {
    snippets: SnippetMap,
}

impl Showcase {
    pub fn new(snippets: SnippetMap) -> Self {
        Self { snippets }
    }

    /// Build every configured snippet.
    pub fn from_config(cfg: &Config) -> Result<Self, SnippetMapError> {
        Ok(Self::new(SnippetMap::from_config(cfg)?))
    }

    pub fn snippets(&self) -> &SnippetMap {
        &self.snippets
    }

    /// Run each snippet in order, writing its output to `out`.
    ///
    /// Snippets are separated by a rule line. A snippet's output is written
    /// only once it has finished; the first failure stops the run.
    pub fn run(&self, out: &mut dyn Write) -> Result<(), SnippetError> {
        for (i, (id, snippet)) in self.snippets.iter().enumerate() {
            if i > 0 {
                writeln!(out, "{}", "─".repeat(SEPARATOR_WIDTH))?;
            }

            let start_msg = SnippetRunStarted {
                snippet_id: id,
                kind: snippet.name(),
            };
            let span = start_msg.span("snippet_run");
            let _guard = span.enter();
            start_msg.log();

            let start_time = Instant::now();
            let mut buffer = Vec::new();
            if let Err(e) = snippet.run(&mut buffer) {
                SnippetRunFailed {
                    snippet_id: id,
                    error: &e,
                }
                .log();
                return Err(e);
            }

            out.write_all(&buffer)?;

            SnippetRunCompleted {
                snippet_id: id,
                output_size: buffer.len(),
                duration: start_time.elapsed(),
            }
            .log();
        }

        out.flush()?;
        Ok(())
    }
}
