// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod snippet;
mod snippet_map;

pub use config::{ConfigError, ValidationError};
pub use snippet::SnippetError;
pub use snippet_map::SnippetMapError;
