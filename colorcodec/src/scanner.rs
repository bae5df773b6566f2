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

use crate::config::MarkupConfig;
use crate::consts::SECTION_SIGN;
use crate::string::{ColorMarkup, Segment, SegmentedText};
use crate::style::{Directive, StyleState};
use tracing::{instrument, trace};

/// Internal state machine states for the scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    /// Visible text. A `§` moves to `Directive`, anything else is emitted.
    Normal,
    /// A `§` was consumed; the next character is its code.
    Directive,
}

/// A push scanner for section-sign coded text.
///
/// Characters are fed one at a time through [`ColorScanner::next`]. A `§` and the code
/// after it are consumed silently and update the active [`StyleState`]; every other
/// character comes back as a one character [`Segment`] carrying a snapshot of that state.
///
/// A `§` with nothing after it is not a directive. Call [`ColorScanner::finish`] at the
/// end of input to emit it as visible text.
///
/// # Examples
///
/// ```
/// use chatregex_colorcodec::{Color, ColorScanner};
///
/// let mut scanner = ColorScanner::new();
/// assert_eq!(scanner.next('§'), None);
/// assert_eq!(scanner.next('c'), None);
/// let segment = scanner.next('!').unwrap();
/// assert_eq!(segment.text, "!");
/// assert_eq!(segment.style.color, Some(Color::Red));
/// assert_eq!(scanner.finish(), None);
/// ```
#[derive(Clone, Debug)]
pub struct ColorScanner {
    config: MarkupConfig,
    state: State,
    style: StyleState,
}

impl ColorScanner {
    /// Creates a scanner with the default [`MarkupConfig`].
    pub fn new() -> Self {
        Self::with_config(MarkupConfig::default())
    }

    pub fn with_config(config: MarkupConfig) -> Self {
        Self {
            config,
            state: State::Normal,
            style: StyleState::plain(),
        }
    }

    /// Returns the scanner to its initial state, dropping any pending `§` and all style.
    pub fn clear(&mut self) {
        self.state = State::Normal;
        self.style = StyleState::plain();
    }

    /// The style that the next visible character would carry.
    pub fn style(&self) -> StyleState {
        self.style
    }

    /// Process the next character.
    ///
    /// Returns `Some(segment)` for a visible character and `None` while a directive is
    /// being consumed.
    pub fn next(&mut self, ch: char) -> Option<Segment> {
        match self.state {
            State::Normal => self.process_normal(ch),
            State::Directive => self.process_directive(ch),
        }
    }

    /// Ends the input. A `§` left pending is emitted as visible text.
    pub fn finish(&mut self) -> Option<Segment> {
        let pending = self.state == State::Directive;
        self.state = State::Normal;
        pending.then(|| Segment::from_char(SECTION_SIGN, self.style))
    }

    fn process_normal(&mut self, ch: char) -> Option<Segment> {
        if ch == SECTION_SIGN {
            self.state = State::Directive;
            return None;
        }
        Some(Segment::from_char(ch, self.style))
    }

    fn process_directive(&mut self, code: char) -> Option<Segment> {
        self.state = State::Normal;
        let directive = Directive::from_code(code);
        if let Directive::Unknown(code) = directive {
            trace!(code = %code, "ignoring unknown formatting directive");
        }
        self.style.apply(directive, &self.config);
        None
    }
}

impl Default for ColorScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Scans section-sign coded text into styled segments with the default configuration.
///
/// # Examples
///
/// ```
/// use chatregex_colorcodec::{Color, scan_color_markup};
///
/// let markup = scan_color_markup("§ahello");
/// assert_eq!(markup.segments().len(), 5);
/// assert!(markup.segments().iter().all(|s| s.style.color == Some(Color::Green)));
///
/// assert!(scan_color_markup("§k§k").is_empty());
/// ```
pub fn scan_color_markup(text: &str) -> ColorMarkup {
    scan_color_markup_with(text, &MarkupConfig::default())
}

/// Scans section-sign coded text into styled segments.
#[instrument(level = "trace", skip_all, fields(len = text.len()))]
pub fn scan_color_markup_with(text: &str, config: &MarkupConfig) -> ColorMarkup {
    let mut scanner = ColorScanner::with_config(config.clone());
    let mut segments = SegmentedText::with_capacity(text.len());
    for ch in text.chars() {
        if let Some(segment) = scanner.next(ch) {
            segments.push(segment);
        }
    }
    if let Some(segment) = scanner.finish() {
        segments.push(segment);
    }
    trace!(segments = segments.len(), "scanned color markup");
    ColorMarkup::from_segments(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, Format};

    fn styles(text: &str) -> Vec<(String, StyleState)> {
        scan_color_markup(text)
            .segments()
            .iter()
            .map(|s| (s.text.clone(), s.style))
            .collect()
    }

    #[test]
    fn test_plain_text_one_segment_per_char() {
        let markup = scan_color_markup("abc");
        let segments = markup.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].text, "a");
        assert_eq!(segments[1].text, "b");
        assert_eq!(segments[2].text, "c");
        assert!(segments.iter().all(|s| s.style.is_plain()));
    }

    #[test]
    fn test_green_hello() {
        let markup = scan_color_markup("§ahello");
        assert!(!markup.is_empty());
        let segments = markup.segments();
        assert_eq!(segments.len(), 5);
        for (segment, expected) in segments.iter().zip("hello".chars()) {
            assert_eq!(segment.text, expected.to_string());
            assert_eq!(segment.style, StyleState::plain().with_color(Color::Green));
            assert_eq!(segment.style.class_attr(), "color-green");
        }
    }

    #[test]
    fn test_directives_only_is_empty() {
        assert_eq!(scan_color_markup("§k§k"), ColorMarkup::NoVisibleText);
        assert_eq!(scan_color_markup(""), ColorMarkup::NoVisibleText);
        assert_eq!(scan_color_markup("§z§r§a"), ColorMarkup::NoVisibleText);
    }

    #[test]
    fn test_uppercase_codes() {
        let result = styles("§CX");
        assert_eq!(result[0].1.color, Some(Color::Red));
    }

    #[test]
    fn test_back_to_back_colors_keep_last() {
        let result = styles("§c§9X");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].1, StyleState::plain().with_color(Color::Blue));
    }

    #[test]
    fn test_formats_accumulate() {
        let result = styles("§l§nX");
        let style = result[0].1;
        assert!(style.formats.contains(Format::Bold));
        assert!(style.formats.contains(Format::Underline));
        assert_eq!(style.formats.len(), 2);
        assert_eq!(style.color, None);
    }

    #[test]
    fn test_repeated_format_is_deduplicated() {
        let result = styles("§l§lX");
        assert_eq!(result[0].1.formats.len(), 1);
    }

    #[test]
    fn test_reset_clears_style() {
        let result = styles("§a§lA§rB");
        assert!(!result[0].1.is_plain());
        assert!(result[1].1.is_plain());
    }

    #[test]
    fn test_unknown_directive_consumed_silently() {
        let result = styles("§aA§zB");
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].0, "B");
        assert_eq!(result[1].1.color, Some(Color::Green));
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_unknown_directive_is_traced() {
        let _ = scan_color_markup("§zX");
        assert!(logs_contain("ignoring unknown formatting directive"));
    }

    #[test]
    fn test_escape_consumes_escape() {
        // `§§` is a directive with code `§`, which is unknown.
        let result = styles("a§§b");
        assert_eq!(
            result.iter().map(|(t, _)| t.as_str()).collect::<String>(),
            "ab"
        );
    }

    #[test]
    fn test_trailing_escape_is_visible() {
        let result = styles("§a5§");
        assert_eq!(result.len(), 2);
        assert_eq!(result[1].0, "§");
        assert_eq!(result[1].1.color, Some(Color::Green));
    }

    #[test]
    fn test_lone_escape_is_visible() {
        let markup = scan_color_markup("§");
        assert!(!markup.is_empty());
        assert_eq!(markup.segments()[0].text, "§");
    }

    #[test]
    fn test_earlier_segments_are_snapshots() {
        let result = styles("A§cB");
        assert!(result[0].1.is_plain());
        assert_eq!(result[1].1.color, Some(Color::Red));
    }

    #[test]
    fn test_segments_keep_raw_text() {
        let markup = scan_color_markup("<&>");
        let html = markup.into_text().to_html();
        assert_eq!(html, "&lt;&amp;&gt;");
    }

    #[test]
    fn test_multibyte_characters() {
        let result = styles("§6日本");
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].0, "日");
        assert_eq!(result[1].1.color, Some(Color::Gold));
    }

    #[test]
    fn test_streaming_input() {
        let mut scanner = ColorScanner::new();
        assert_eq!(scanner.next('§'), None);
        assert_eq!(scanner.next('l'), None);
        assert!(scanner.style().formats.contains(Format::Bold));
        let segment = scanner.next('x').unwrap();
        assert!(segment.style.formats.contains(Format::Bold));
        scanner.clear();
        assert!(scanner.style().is_plain());
    }

    #[test]
    fn test_vanilla_color_drops_formats() {
        let markup = scan_color_markup_with("§l§aX", &MarkupConfig::vanilla());
        let style = markup.segments()[0].style;
        assert_eq!(style.color, Some(Color::Green));
        assert!(style.formats.is_empty());
    }
}
