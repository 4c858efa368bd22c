// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Textual representations of values.
//!
//! Two renderings are provided:
//!
//! * **repr** - the quoted, escaped source-like form of a value. Printable
//!   non-ASCII characters are kept as-is.
//! * **ascii repr** - the same form with every non-ASCII character replaced
//!   by an escape sequence, so the result is always pure ASCII.
//!
//! # Rendering rules
//!
//! | Value            | Rendering                                   |
//! |------------------|---------------------------------------------|
//! | string           | `'text'`, or `"it's"` when it holds `'` only |
//! | integer          | decimal                                     |
//! | float            | shortest round-trip, `1.0`, `1e+16`, `nan`  |
//! | bool             | `True` / `False`                            |
//! | none             | `None`                                      |
//! | list             | `[a, b, c]`                                 |
//!
//! Escapes use lowercase hex: `\xe9` up to U+00FF, `\u2603` up to U+FFFF,
//! `\U0001f600` beyond.
//!
//! ```rust
//! use the_snippets::value::AsciiRepr;
//!
//! assert_eq!("My name".ascii_repr(), "'My name'");
//! assert_eq!("café".ascii_repr(), r"'caf\xe9'");
//! assert_eq!("café".repr(), "'café'");
//! ```

use std::fmt::Write;

use unicode_general_category::{get_general_category, GeneralCategory};

use super::Value;

/// Values that can render themselves in repr / ascii-repr form.
pub trait AsciiRepr {
    /// Append the rendering to `out`, escaping all non-ASCII characters when
    /// `ascii_only` is set.
    fn write_repr(&self, out: &mut String, ascii_only: bool);

    /// The ASCII-safe rendering.
    fn ascii_repr(&self) -> String {
        let mut out = String::new();
        self.write_repr(&mut out, true);
        out
    }

    /// The rendering with printable non-ASCII characters left intact.
    fn repr(&self) -> String {
        let mut out = String::new();
        self.write_repr(&mut out, false);
        out
    }
}

impl AsciiRepr for str {
    fn write_repr(&self, out: &mut String, ascii_only: bool) {
        let quote = if self.contains('\'') && !self.contains('"') {
            '"'
        } else {
            '\''
        };

        out.push(quote);
        for c in self.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\t' => out.push_str("\\t"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                c if c == quote => {
                    out.push('\\');
                    out.push(c);
                }
                c if c.is_ascii() && !c.is_ascii_control() => out.push(c),
                c if !c.is_ascii() && !ascii_only && is_printable(c) => out.push(c),
                c => push_escape(out, c),
            }
        }
        out.push(quote);
    }
}

/// Letters, marks, numbers, punctuation and symbols are printable; separators,
/// control, format, private-use and unassigned code points are not.
fn is_printable(c: char) -> bool {
    !matches!(
        get_general_category(c),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::SpaceSeparator
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

fn push_escape(out: &mut String, c: char) {
    let code = c as u32;
    // Writing into a String cannot fail.
    let _ = match code {
        0..=0xff => write!(out, "\\x{:02x}", code),
        0x100..=0xffff => write!(out, "\\u{:04x}", code),
        _ => write!(out, "\\U{:08x}", code),
    };
}

impl AsciiRepr for String {
    fn write_repr(&self, out: &mut String, ascii_only: bool) {
        self.as_str().write_repr(out, ascii_only);
    }
}

impl AsciiRepr for bool {
    fn write_repr(&self, out: &mut String, _ascii_only: bool) {
        out.push_str(if *self { "True" } else { "False" });
    }
}

macro_rules! repr_for_int {
    ($($t:ty),*) => {
        $(
            impl AsciiRepr for $t {
                fn write_repr(&self, out: &mut String, _ascii_only: bool) {
                    let _ = write!(out, "{}", self);
                }
            }
        )*
    };
}

repr_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl AsciiRepr for f64 {
    fn write_repr(&self, out: &mut String, _ascii_only: bool) {
        write_float(out, *self);
    }
}

impl AsciiRepr for f32 {
    fn write_repr(&self, out: &mut String, _ascii_only: bool) {
        write_float(out, f64::from(*self));
    }
}

fn write_float(out: &mut String, value: f64) {
    if value.is_nan() {
        out.push_str("nan");
        return;
    }
    if value.is_infinite() {
        out.push_str(if value > 0.0 { "inf" } else { "-inf" });
        return;
    }

    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        // `{:e}` yields shortest digits as `1.5e-5`; widen the exponent to `e-05`.
        let formatted = format!("{:e}", value);
        if let Some((mantissa, exponent)) = formatted.split_once('e') {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            let _ = write!(out, "{}e{}{:02}", mantissa, sign, exponent.abs());
            return;
        }
    }

    let formatted = value.to_string();
    out.push_str(&formatted);
    if !formatted.contains('.') {
        out.push_str(".0");
    }
}

impl<T: AsciiRepr> AsciiRepr for [T] {
    fn write_repr(&self, out: &mut String, ascii_only: bool) {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            item.write_repr(out, ascii_only);
        }
        out.push(']');
    }
}

impl<T: AsciiRepr> AsciiRepr for Vec<T> {
    fn write_repr(&self, out: &mut String, ascii_only: bool) {
        self.as_slice().write_repr(out, ascii_only);
    }
}

impl<T: AsciiRepr> AsciiRepr for Option<T> {
    fn write_repr(&self, out: &mut String, ascii_only: bool) {
        match self {
            Some(value) => value.write_repr(out, ascii_only),
            None => out.push_str("None"),
        }
    }
}

impl<T: AsciiRepr + ?Sized> AsciiRepr for &T {
    fn write_repr(&self, out: &mut String, ascii_only: bool) {
        (**self).write_repr(out, ascii_only);
    }
}

impl AsciiRepr for Value {
    fn write_repr(&self, out: &mut String, ascii_only: bool) {
        match self {
            Value::None => out.push_str("None"),
            Value::Bool(b) => b.write_repr(out, ascii_only),
            Value::Int(i) => i.write_repr(out, ascii_only),
            Value::Float(f) => f.write_repr(out, ascii_only),
            Value::Str(s) => s.write_repr(out, ascii_only),
            Value::List(items) => items.write_repr(out, ascii_only),
        }
    }
}
