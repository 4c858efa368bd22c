// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for the human-readable line and
//! [`StructuredLog`] to emit it at the right level with its fields attached.
//!
//! * `snippet` - Snippet run lifecycle events
//! * `config` - Configuration loading and validation events
//! * `decorators` - Wrapped callable invocations
//! * `oop` - Race car state changes

use tracing::Span;

pub mod config;
pub mod decorators;
pub mod oop;
pub mod snippet;

/// Emits a message as a structured `tracing` event or opens a span carrying
/// the message's fields.
pub trait StructuredLog: std::fmt::Display {
    /// Emit the message at its designated level.
    fn log(&self);

    /// Build a span named `name` carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
