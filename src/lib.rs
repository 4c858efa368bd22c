// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;        // config + showcase runtime
pub mod decorators;    // callable wrappers
pub mod errors;        // error handling
pub mod lambdas;       // closures and keyed sorting
pub mod observability;
pub mod oop;           // dynamically-attributed entities
pub mod snippets;      // runnable snippets + factory
pub mod traits;        // unified abstractions
pub mod value;         // dynamic values and their renderings
