// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod runtime;
mod snippet_map;
mod validation;

pub mod consts;

pub use loader::{load_and_validate_config, load_config, Config, SnippetConfig};
pub use runtime::Showcase;
pub use snippet_map::SnippetMap;
pub use validation::validate_config;
