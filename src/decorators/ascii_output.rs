// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::value::AsciiRepr;

/// Wrap `f` so that every call returns the ASCII-safe rendering of its result.
///
/// # Example
/// ```
/// use the_snippets::decorators::ascii_output;
///
/// let greet = ascii_output(|name: &str| format!("Grüß {}", name));
/// assert_eq!(greet("dich"), r"'Gr\xfc\xdf dich'");
/// ```
pub fn ascii_output<A, R, F>(f: F) -> impl Fn(A) -> String
where
    F: Fn(A) -> R,
    R: AsciiRepr,
{
    move |args| f(args).ascii_repr()
}

/// Fallible form of [`ascii_output`]: an error from `f` is returned as-is,
/// only a successful value is rendered.
pub fn try_ascii_output<A, R, E, F>(f: F) -> impl Fn(A) -> Result<String, E>
where
    F: Fn(A) -> Result<R, E>,
    R: AsciiRepr,
{
    move |args| f(args).map(|value| value.ascii_repr())
}

pub fn my_function() -> &'static str {
    "My name"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_wrapped_function_returns_quoted_text() {
        let decorated = ascii_output(|()| my_function());
        assert_eq!(decorated(()), "'My name'");
    }

    #[test]
    fn test_wrapper_keeps_parameters() {
        let add = ascii_output(|(a, b): (i64, i64)| a + b);
        assert_eq!(add((2, 3)), "5");

        let tag = ascii_output(|n: usize| Value::from(vec!["é"; n]));
        assert_eq!(tag(2), r"['\xe9', '\xe9']");
    }

    #[test]
    fn test_wrapper_can_be_called_repeatedly() {
        let decorated = ascii_output(|x: f64| x / 2.0);
        assert_eq!(decorated(3.0), "1.5");
        assert_eq!(decorated(4.0), "2.0");
    }

    #[test]
    fn test_failure_propagates_unchanged() {
        let parse = try_ascii_output(|text: &str| text.parse::<i64>());

        assert_eq!(parse("42"), Ok("42".to_string()));

        let expected = "nope".parse::<i64>().unwrap_err();
        assert_eq!(parse("nope"), Err(expected));
    }
}
