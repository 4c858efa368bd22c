// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::config::consts::{
    DEFAULT_COMPUTE_INPUT, DEFAULT_QUADRATIC, DEFAULT_QUADRATIC_INPUTS, DEFAULT_SCIFI_AUTHORS,
};
use crate::errors::SnippetError;
use crate::lambdas::{build_checked_quadratic_function, compute, sort_by_last_name, Quadratic};
use crate::traits::Snippet;
use crate::value::AsciiRepr;

/// Configuration for the anonymous functions snippet
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnonymousFunctionsConfig {
    pub compute_input: i64,
    /// Full names, sorted by last name when the snippet runs
    pub authors: Vec<String>,
    pub quadratic: Quadratic<i64>,
    /// Points at which the built quadratic is evaluated
    pub inputs: Vec<i64>,
}

impl Default for AnonymousFunctionsConfig {
    fn default() -> Self {
        let (a, b, c) = DEFAULT_QUADRATIC;
        Self {
            compute_input: DEFAULT_COMPUTE_INPUT,
            authors: DEFAULT_SCIFI_AUTHORS.iter().map(|s| s.to_string()).collect(),
            quadratic: Quadratic::new(a, b, c),
            inputs: DEFAULT_QUADRATIC_INPUTS.to_vec(),
        }
    }
}

/// Anonymous functions snippet - a plain function, a keyed sort and a
/// function-building factory
pub struct AnonymousFunctionsSnippet {
    config: AnonymousFunctionsConfig,
}

impl AnonymousFunctionsSnippet {
    pub fn new(config: AnonymousFunctionsConfig) -> Self {
        Self { config }
    }
}

impl Default for AnonymousFunctionsSnippet {
    fn default() -> Self {
        Self::new(AnonymousFunctionsConfig::default())
    }
}

impl Snippet for AnonymousFunctionsSnippet {
    fn run(&self, out: &mut dyn Write) -> Result<(), SnippetError> {
        let input = self.config.compute_input;
        let computed = compute(input).ok_or_else(|| SnippetError::Overflow {
            expression: format!("compute({})", input),
        })?;
        writeln!(out, "Normal function:  {}", computed)?;

        let mut authors = self.config.authors.clone();
        sort_by_last_name(&mut authors);
        writeln!(out, "{}", authors.repr())?;

        let Quadratic { a, b, c } = self.config.quadratic;
        let f = build_checked_quadratic_function(a, b, c);
        for &x in &self.config.inputs {
            let y = f(x).ok_or_else(|| SnippetError::Overflow {
                expression: format!("f({})", x),
            })?;
            writeln!(out, "{}", y)?;
        }

        Ok(())
    }

    fn name(&self) -> &'static str {
        "anonymous_functions"
    }
}
