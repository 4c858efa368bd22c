// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Sort key for a full name: its last whitespace-delimited token, lowercased.
///
/// A name with no tokens yields an empty key.
pub fn last_name_key(name: &str) -> String {
    name.split_whitespace()
        .next_back()
        .unwrap_or_default()
        .to_lowercase()
}

/// Sort full names in place by last name, ignoring case.
///
/// The sort is stable: names sharing a last name keep their relative order.
///
/// # Example
/// ```
/// use the_snippets::lambdas::sort_by_last_name;
///
/// let mut names = vec!["Bob Zed", "Ann Lee"];
/// sort_by_last_name(&mut names);
/// assert_eq!(names, vec!["Ann Lee", "Bob Zed"]);
/// ```
pub fn sort_by_last_name<S: AsRef<str>>(names: &mut [S]) {
    names.sort_by_cached_key(|name| last_name_key(name.as_ref()));
}
