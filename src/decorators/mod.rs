// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Wrappers that add behaviour around an existing callable.
//!
//! A wrapper takes a callable and returns a new one with the same parameter
//! type that delegates to the original. Rust has no variadic functions, so a
//! callable's parameters are expressed as one argument type: `()` for a
//! zero-argument callable, a tuple for several.
//!
//! * [`ascii_output`] / [`try_ascii_output`] - replace the return value with
//!   its ASCII-safe rendering
//! * [`CallCount`] - count invocations and forward them

mod ascii_output;
mod call_count;

pub use ascii_output::{ascii_output, my_function, try_ascii_output};
pub use call_count::CallCount;
