// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt::{Display, Formatter};
use std::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// The captured coefficients of `f(x) = ax^2 + bx + c`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quadratic<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> Quadratic<T>
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    pub fn eval(&self, x: T) -> T {
        self.a * x * x + self.b * x + self.c
    }
}

impl Quadratic<i64> {
    /// Integer evaluation that reports overflow as `None` instead of wrapping.
    pub fn checked_eval(&self, x: i64) -> Option<i64> {
        let square = self
            .a
            .checked_mul(x)?
            .checked_mul(x)?;
        square
            .checked_add(self.b.checked_mul(x)?)?
            .checked_add(self.c)
    }
}

impl<T: Display> Display for Quadratic<T> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "f(x) = {}x^2 + {}x + {}", self.a, self.b, self.c)
    }
}

/// Return a function `f(x) = ax^2 + bx + c`.
///
/// The returned closure owns its coefficients and can be called any number
/// of times.
///
/// # Example
/// ```
/// use the_snippets::lambdas::build_quadratic_function;
///
/// let f = build_quadratic_function(2, 3, -5);
/// assert_eq!((f(0), f(1), f(2)), (-5, 0, 9));
/// ```
pub fn build_quadratic_function<T>(a: T, b: T, c: T) -> impl Fn(T) -> T
where
    T: Copy + Add<Output = T> + Mul<Output = T>,
{
    let quadratic = Quadratic::new(a, b, c);
    move |x| quadratic.eval(x)
}

/// Integer form of [`build_quadratic_function`]: the returned function
/// yields `None` when `f(x)` does not fit in an `i64`.
///
/// # Example
/// ```
/// use the_snippets::lambdas::build_checked_quadratic_function;
///
/// let f = build_checked_quadratic_function(2, 3, -5);
/// assert_eq!(f(2), Some(9));
/// assert_eq!(f(4_000_000_000), None);
/// ```
pub fn build_checked_quadratic_function(a: i64, b: i64, c: i64) -> impl Fn(i64) -> Option<i64> {
    let quadratic = Quadratic::new(a, b, c);
    move |x| quadratic.checked_eval(x)
}
