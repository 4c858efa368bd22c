// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::{decorators::WrappedCallInvoked, StructuredLog};

/// Counts how many times a callable has been invoked through it.
///
/// Construction only stores the callable; [`CallCount::call`] is the
/// invocation path that bumps the counter and forwards the arguments.
///
/// # Example
/// ```
/// use the_snippets::decorators::CallCount;
///
/// let mut double = CallCount::new("double", |x: i32| x * 2);
/// assert_eq!(double.call(4), 8);
/// assert_eq!(double.call(5), 10);
/// assert_eq!(double.count(), 2);
/// ```
pub struct CallCount<F> {
    name: &'static str,
    f: F,
    count: usize,
}

impl<F> CallCount<F> {
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f, count: 0 }
    }

    /// Increment the counter, then invoke the wrapped callable.
    pub fn call<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
    {
        self.count += 1;
        WrappedCallInvoked {
            callable: self.name,
            count: self.count,
        }
        .log();
        (self.f)(args)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
