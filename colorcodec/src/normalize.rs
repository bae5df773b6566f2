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

//! Rewriting of the ASCII `&` marker into the canonical `§` escape.
//!
//! Users type `&a` where the chat text carries `§a`. A backslash keeps a marker literal:
//! `\&` stands for a plain `&`.

use crate::consts::{ALTERNATE_MARKER, ALTERNATE_RESET, MARKER_ESCAPE, SECTION_SIGN};
use tracing::{debug, instrument};

/// A pattern rewritten into section-sign form, ready to compile.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NormalizedPattern {
    /// The rewritten pattern
    pub normalized: String,
    /// Whether the raw pattern contained an unescaped `&`
    pub uses_alternate_escape: bool,
}

impl NormalizedPattern {
    pub fn as_str(&self) -> &str {
        &self.normalized
    }
}

impl std::fmt::Display for NormalizedPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.normalized)
    }
}

/// Rewrites a raw pattern written with the `&` marker into section-sign form.
///
/// The steps run in order, each on the output of the previous one:
///
/// 1. Every `&r` is deleted. Patterns are matched against text in which resets carry
///    no meaning worth matching.
/// 2. Every `\&` becomes a literal `&` that is exempt from step 3.
/// 3. Every other `&` becomes `§`.
///
/// `uses_alternate_escape` reports whether the *raw* pattern has an `&` not preceded by
/// a backslash; see [`has_unescaped_marker`].
///
/// # Examples
///
/// ```
/// use chatregex_colorcodec::normalize_pattern;
///
/// let pattern = normalize_pattern("foo&r&cbar");
/// assert_eq!(pattern.normalized, "foo§cbar");
/// assert!(pattern.uses_alternate_escape);
///
/// let pattern = normalize_pattern(r"a\&b");
/// assert_eq!(pattern.normalized, "a&b");
/// assert!(!pattern.uses_alternate_escape);
/// ```
#[instrument(level = "trace", skip_all)]
pub fn normalize_pattern(raw: &str) -> NormalizedPattern {
    let uses_alternate_escape = has_unescaped_marker(raw);
    let normalized = convert_alternate_markers(&raw.replace(ALTERNATE_RESET, ""));
    debug!(
        raw,
        normalized = %normalized,
        uses_alternate_escape,
        "normalized pattern"
    );
    NormalizedPattern {
        normalized,
        uses_alternate_escape,
    }
}

/// Converts `&` markers to `§`, keeping `\&` as a literal `&`.
///
/// This is the marker rewrite of [`normalize_pattern`] without the reset removal, for
/// text such as notification titles where `&r` must survive as `§r`.
///
/// ```
/// use chatregex_colorcodec::convert_alternate_markers;
///
/// assert_eq!(convert_alternate_markers(r"&6Gold &rand \& more"), "§6Gold §rand & more");
/// ```
pub fn convert_alternate_markers(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            MARKER_ESCAPE if chars.peek() == Some(&ALTERNATE_MARKER) => {
                chars.next();
                result.push(ALTERNATE_MARKER);
            }
            ALTERNATE_MARKER => result.push(SECTION_SIGN),
            _ => result.push(ch),
        }
    }
    result
}

/// Returns `true` if `raw` contains an `&` at the start or after any character other
/// than a backslash.
///
/// ```
/// use chatregex_colorcodec::has_unescaped_marker;
///
/// assert!(has_unescaped_marker("&aHello"));
/// assert!(has_unescaped_marker(r"\&&b"));
/// assert!(!has_unescaped_marker(r"Tom \& Jerry"));
/// assert!(!has_unescaped_marker("no markers"));
/// ```
pub fn has_unescaped_marker(raw: &str) -> bool {
    let mut previous = None;
    for ch in raw.chars() {
        if ch == ALTERNATE_MARKER && previous != Some(MARKER_ESCAPE) {
            return true;
        }
        previous = Some(ch);
    }
    false
}
