// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Plain functions, anonymous functions and functions that build functions.

mod quadratic;
mod sorting;

pub use quadratic::{build_checked_quadratic_function, build_quadratic_function, Quadratic};
pub use sorting::{last_name_key, sort_by_last_name};

/// Double `number` and add one, or `None` if the result does not fit in an `i64`.
pub fn compute(number: i64) -> Option<i64> {
    number.checked_mul(2)?.checked_add(1)
}
