// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic logging
//! throughout the crate. Message types follow a struct-based pattern with a
//! `Display` implementation so log text lives in one place instead of being
//! scattered through the code as magic strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::snippet` - Snippet run lifecycle events
//! * `messages::config` - Configuration loading and validation events
//! * `messages::decorators` - Wrapped callable invocations
//! * `messages::oop` - Race car state changes
//!
//! # Usage
//!
//! ```rust
//! use the_snippets::observability::messages::snippet::SnippetRunStarted;
//! use the_snippets::observability::messages::StructuredLog;
//!
//! let msg = SnippetRunStarted {
//!     snippet_id: "lambdas",
//!     kind: "anonymous_functions",
//! };
//!
//! msg.log();
//! ```
//!
//! Nothing is emitted unless a subscriber is installed; the binary installs
//! `tracing-subscriber` writing to stderr so stdout carries only snippet output.

pub mod messages;
