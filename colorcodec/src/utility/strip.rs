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

use crate::consts::SECTION_SIGN;
use std::borrow::Cow;

/// Removes section-sign formatting directives from a string.
///
/// Every `§` is removed together with the character that follows it, whatever that
/// character is, so unknown codes disappear as well. A `§` followed by a line terminator
/// (`\n`, `\r`, U+2028, U+2029) or by nothing is kept, and so is the terminator.
///
/// # Performance
///
/// If the input contains no `§`, a borrowed reference to the original string is returned
/// (zero-copy). Otherwise a new `String` is allocated.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// # use chatregex_colorcodec::strip_color_codes;
///
/// assert_eq!(strip_color_codes("§aGreen §lbold§r text"), "Green bold text");
///
/// let plain = "Plain Text";
/// assert!(matches!(strip_color_codes(plain), Cow::Borrowed(_)));
///
/// // A dangling escape has no code to consume.
/// assert_eq!(strip_color_codes("50§"), "50§");
/// ```
pub fn strip_color_codes(str: &str) -> Cow<'_, str> {
    if !str.contains(SECTION_SIGN) {
        return Cow::Borrowed(str);
    }

    let mut result = String::with_capacity(str.len());
    let mut chars = str.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == SECTION_SIGN {
            if let Some(&code) = chars.peek() {
                if !is_line_terminator(code) {
                    chars.next();
                    continue;
                }
            }
        }
        result.push(ch);
    }

    Cow::Owned(result)
}

fn is_line_terminator(ch: char) -> bool {
    matches!(ch, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_codes_is_borrowed() {
        let result = strip_color_codes("hello world");
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "hello world");
    }

    #[test]
    fn test_strips_colors_and_formats() {
        assert_eq!(strip_color_codes("§6[§eServer§6] §fHi"), "[Server] Hi");
        assert_eq!(strip_color_codes("§l§n§obold"), "bold");
    }

    #[test]
    fn test_strips_unknown_codes() {
        assert_eq!(strip_color_codes("a§zb§§c"), "abc");
    }

    #[test]
    fn test_keeps_trailing_escape() {
        assert_eq!(strip_color_codes("end§"), "end§");
    }

    #[test]
    fn test_keeps_escape_before_line_terminator() {
        assert_eq!(strip_color_codes("a§\nb"), "a§\nb");
        assert_eq!(strip_color_codes("a§\r\nb"), "a§\r\nb");
    }

    #[test]
    fn test_strips_non_ascii_code() {
        assert_eq!(strip_color_codes("x§éy"), "xy");
    }

    #[test]
    fn test_empty() {
        assert_eq!(strip_color_codes(""), "");
    }
}
