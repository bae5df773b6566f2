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

use std::borrow::Cow;

/// Returns the markup escape for a character, or `None` if it passes through unchanged.
pub fn escape_char(ch: char) -> Option<&'static str> {
    match ch {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#039;"),
        _ => None,
    }
}

/// Escapes `& < > " '` for embedding in HTML text or attribute values.
///
/// Escaping is not idempotent: escaping already escaped text escapes the `&` of each
/// entity again. Callers escape raw text exactly once.
///
/// # Examples
///
/// ```
/// # use chatregex_colorcodec::escape_html;
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;");
/// assert_eq!(escape_html("&amp;"), "&amp;amp;");
/// ```
pub fn escape_html(str: &str) -> Cow<'_, str> {
    if !str.chars().any(|ch| escape_char(ch).is_some()) {
        return Cow::Borrowed(str);
    }

    let mut result = String::with_capacity(str.len() + 16);
    push_escaped(&mut result, str);
    Cow::Owned(result)
}

/// Appends `str` to `out`, escaping markup characters.
pub(crate) fn push_escaped(out: &mut String, str: &str) {
    for ch in str.chars() {
        match escape_char(ch) {
            Some(entity) => out.push_str(entity),
            None => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_each_special_character() {
        assert_eq!(escape_html("&"), "&amp;");
        assert_eq!(escape_html("<"), "&lt;");
        assert_eq!(escape_html(">"), "&gt;");
        assert_eq!(escape_html("\""), "&quot;");
        assert_eq!(escape_html("'"), "&#039;");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        let result = escape_html("§a plain ünïcode");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_double_escape_is_not_idempotent() {
        let once = escape_html("a < b");
        let twice = escape_html(&once);
        assert_eq!(once, "a &lt; b");
        assert_eq!(twice, "a &amp;lt; b");
        assert_ne!(once, twice);
    }
}
