// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};

use tracing::Span;

use crate::observability::messages::StructuredLog;

/// A call-counting wrapper forwarded an invocation.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct WrappedCallInvoked<'a> {
    pub callable: &'a str,
    pub count: usize,
}

impl Display for WrappedCallInvoked<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Call #{} to '{}'", self.count, self.callable)
    }
}

impl StructuredLog for WrappedCallInvoked<'_> {
    fn log(&self) {
        tracing::debug!(callable = self.callable, count = self.count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "wrapped_call",
            span_name = name,
            callable = self.callable,
            count = self.count,
        )
    }
}
