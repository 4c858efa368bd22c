// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Runnable snippets and the factory that builds them from configuration.
//!
//! | Kind                  | Snippet                       |
//! |-----------------------|-------------------------------|
//! | `decorators`          | [`DecoratorsSnippet`]         |
//! | `anonymous_functions` | [`AnonymousFunctionsSnippet`] |
//! | `race_car`            | [`RaceCarSnippet`]            |
//!
//! ```rust
//! use the_snippets::snippets::SnippetFactory;
//! use the_snippets::config::SnippetConfig;
//! use std::collections::HashMap;
//!
//! let config = SnippetConfig {
//!     id: "lambdas".to_string(),
//!     kind: "anonymous_functions".to_string(),
//!     options: HashMap::new(),
//! };
//!
//! let snippet = SnippetFactory::create_snippet(&config).unwrap();
//! let mut out = Vec::new();
//! snippet.run(&mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().starts_with("Normal function:  9"));
//! ```

pub mod anonymous_functions;
pub mod decorators;
pub mod factory;
pub mod race_car;

pub use anonymous_functions::*;
pub use decorators::*;
pub use factory::SnippetFactory;
pub use race_car::*;
