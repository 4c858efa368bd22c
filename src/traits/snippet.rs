// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;

use crate::errors::SnippetError;

/// A standalone, runnable example that prints its results as plain text.
pub trait Snippet {
    fn run(&self, out: &mut dyn Write) -> Result<(), SnippetError>;

    /// The snippet kind, as named in configuration.
    fn name(&self) -> &'static str;
}
