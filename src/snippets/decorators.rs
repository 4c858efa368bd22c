// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::config::consts::DEFAULT_GREETING_NAMES;
use crate::decorators::{ascii_output, my_function, CallCount};
use crate::errors::SnippetError;
use crate::traits::Snippet;

/// Configuration for the decorators snippet
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecoratorsConfig {
    /// Names greeted through the call-counted `hello`
    pub names: Vec<String>,
}

impl Default for DecoratorsConfig {
    fn default() -> Self {
        Self {
            names: DEFAULT_GREETING_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Decorators snippet - shows an output-rendering wrapper and a call counter
pub struct DecoratorsSnippet {
    config: DecoratorsConfig,
}

impl DecoratorsSnippet {
    pub fn new(config: DecoratorsConfig) -> Self {
        Self { config }
    }
}

impl Default for DecoratorsSnippet {
    fn default() -> Self {
        Self::new(DecoratorsConfig::default())
    }
}

impl Snippet for DecoratorsSnippet {
    fn run(&self, out: &mut dyn Write) -> Result<(), SnippetError> {
        let decorated = ascii_output(|()| my_function());
        writeln!(out, "{}", decorated(()))?;

        let mut hello = CallCount::new("hello", |name: &str| writeln!(out, "Hello {}", name));
        for name in &self.config.names {
            hello.call(name.as_str())?;
        }
        let calls = hello.count();

        writeln!(out, "hello called {} times", calls)?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "decorators"
    }
}
