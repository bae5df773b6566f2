//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Heuristic screening for patterns prone to catastrophic backtracking.
//!
//! Patterns tested here are meant for a backtracking matcher, so the screen that
//! matcher applies before compiling is reproduced.

use regex::Regex;
use std::sync::LazyLock;

/// A group containing a quantifier, itself quantified: `(a+)+`, `(a*)*`, `(a{1,5})+`.
static NESTED_QUANTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]*[+*{][^)]*\)[+*{]").expect("nested quantifier screen is a valid regex")
});

/// A group containing an alternation, quantified: `(a|b)+`.
static QUANTIFIED_ALTERNATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]*\|[^)]*\)[+*{]").expect("alternation screen is a valid regex")
});

/// The screening rule a pattern failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnsafeConstruct {
    /// A quantified group containing a quantifier.
    NestedQuantifier,
    /// A quantified group containing an alternation.
    QuantifiedAlternation,
}

impl std::fmt::Display for UnsafeConstruct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UnsafeConstruct::NestedQuantifier => f.write_str("nested quantifiers"),
            UnsafeConstruct::QuantifiedAlternation => f.write_str("quantified alternation"),
        }
    }
}

/// Returns the first construct in `pattern` that the screen rejects, if any.
///
/// ```
/// use chatregex_tester::{UnsafeConstruct, find_unsafe_construct};
///
/// assert_eq!(find_unsafe_construct("(a+)+"), Some(UnsafeConstruct::NestedQuantifier));
/// assert_eq!(find_unsafe_construct("(a|b)+"), Some(UnsafeConstruct::QuantifiedAlternation));
/// assert_eq!(find_unsafe_construct("(a|b)"), None);
/// ```
pub fn find_unsafe_construct(pattern: &str) -> Option<UnsafeConstruct> {
    if NESTED_QUANTIFIER.is_match(pattern) {
        Some(UnsafeConstruct::NestedQuantifier)
    } else if QUANTIFIED_ALTERNATION.is_match(pattern) {
        Some(UnsafeConstruct::QuantifiedAlternation)
    } else {
        None
    }
}

/// Returns `true` if the pattern has no quantified group that contains a quantifier or
/// an alternation.
///
/// # Examples
///
/// ```
/// use chatregex_tester::is_pattern_safe;
///
/// assert!(is_pattern_safe(r"§a(\w+) joined"));
/// assert!(!is_pattern_safe("(a+)+"));
/// assert!(!is_pattern_safe("(yes|no)*"));
/// ```
pub fn is_pattern_safe(pattern: &str) -> bool {
    find_unsafe_construct(pattern).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_patterns_are_safe() {
        assert!(is_pattern_safe("hello"));
        assert!(is_pattern_safe(r"^§6\[(\w+)\] (.*)$"));
        assert!(is_pattern_safe("(abc)+"));
        assert!(is_pattern_safe("a+b*c{2}"));
        assert!(is_pattern_safe("(a|b)"));
    }

    #[test]
    fn test_nested_quantifiers_are_unsafe() {
        assert!(!is_pattern_safe("(a+)+"));
        assert!(!is_pattern_safe("(a*)*"));
        assert!(!is_pattern_safe("(a+)*"));
        assert!(!is_pattern_safe("x(a{1,5})+y"));
        assert!(!is_pattern_safe("(.*){2}"));
    }

    #[test]
    fn test_quantified_alternation_is_unsafe() {
        assert!(!is_pattern_safe("(a|b)+"));
        assert!(!is_pattern_safe("start (foo|bar)* end"));
    }

    #[test]
    fn test_find_unsafe_construct_names_the_rule() {
        assert_eq!(
            find_unsafe_construct("(a{2})*"),
            Some(UnsafeConstruct::NestedQuantifier)
        );
        assert_eq!(
            find_unsafe_construct("(yes|no)*"),
            Some(UnsafeConstruct::QuantifiedAlternation)
        );
        assert_eq!(find_unsafe_construct(r"§6\[(\w+)\]"), None);
        assert_eq!(
            UnsafeConstruct::QuantifiedAlternation.to_string(),
            "quantified alternation"
        );
    }
}
