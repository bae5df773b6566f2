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

use crate::config::PreviewFormat;
use crate::consts::{NO_VISIBLE_TEXT, SECTION_SIGN};
use crate::style::{Format, StyleState};
use crate::utility::{escape_html, push_escaped};
use std::borrow::Cow;

const SGR_RESET: &str = "\x1b[0m";
const SGR_FAINT: &str = "\x1b[2m";

/// A run of visible text tagged with the style active when it was scanned.
///
/// The scanner produces one segment per visible character. [`SegmentedText::coalesce`]
/// merges adjacent segments sharing a style into longer runs.
///
/// `text` holds the raw characters. Use [`Segment::markup`] or the HTML writers to get a
/// markup-safe form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Raw visible text
    pub text: String,
    /// Style snapshot taken when the text was emitted
    pub style: StyleState,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: StyleState) -> Segment {
        Segment {
            text: text.into(),
            style,
        }
    }

    /// A single character segment.
    pub fn from_char(ch: char, style: StyleState) -> Segment {
        Segment {
            text: ch.to_string(),
            style,
        }
    }

    /// The text escaped for embedding in markup.
    pub fn markup(&self) -> Cow<'_, str> {
        escape_html(&self.text)
    }

    /// Appends this segment as HTML: bare escaped text when unstyled, otherwise a `<span>`
    /// carrying the style's classes.
    pub fn write_html(&self, out: &mut String) {
        if self.style.is_plain() {
            push_escaped(out, &self.text);
        } else {
            out.push_str("<span class=\"");
            out.push_str(&self.style.class_attr());
            out.push_str("\">");
            push_escaped(out, &self.text);
            out.push_str("</span>");
        }
    }

    /// Appends this segment wrapped in SGR sequences.
    pub fn write_ansi(&self, out: &mut String) {
        if self.style.is_plain() {
            out.push_str(&self.text);
            return;
        }
        let parameters = self
            .style
            .sgr_parameters()
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(";");
        out.push_str("\x1b[");
        out.push_str(&parameters);
        out.push('m');
        out.push_str(&self.text);
        out.push_str(SGR_RESET);
    }
}

/// An ordered sequence of [`Segment`]s.
///
/// Order always matches input order. Nothing re-sorts segments.
///
/// # Examples
///
/// ```
/// use chatregex_colorcodec::{Color, SegmentedText, StyleState};
///
/// let mut text = SegmentedText::empty();
/// let green = StyleState::plain().with_color(Color::Green);
/// text.push_char('h', green);
/// text.push_char('i', green);
///
/// assert_eq!(text.len(), 2);
/// assert_eq!(text.coalesce().len(), 1);
/// assert_eq!(text.plain_text(), "hi");
/// assert_eq!(text.to_legacy(), "§ahi");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SegmentedText {
    segments: Vec<Segment>,
}

impl SegmentedText {
    pub fn empty() -> SegmentedText {
        SegmentedText::default()
    }

    pub fn with_capacity(capacity: usize) -> SegmentedText {
        SegmentedText {
            segments: Vec::with_capacity(capacity),
        }
    }

    /// Appends a segment as-is. Never merges.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Appends a one character segment.
    pub fn push_char(&mut self, ch: char, style: StyleState) {
        self.segments.push(Segment::from_char(ch, style));
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Returns a copy in which adjacent segments with identical styles are merged.
    pub fn coalesce(&self) -> SegmentedText {
        let mut merged: Vec<Segment> = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match merged.last_mut() {
                Some(last) if last.style == segment.style => last.text.push_str(&segment.text),
                _ => merged.push(segment.clone()),
            }
        }
        SegmentedText { segments: merged }
    }

    /// The visible characters with all styling dropped.
    pub fn plain_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Appends every segment as HTML, one element per segment.
    pub fn write_html(&self, out: &mut String) {
        for segment in &self.segments {
            segment.write_html(out);
        }
    }

    /// Appends the text with ANSI SGR styling. Runs sharing a style share one sequence.
    pub fn write_ansi(&self, out: &mut String) {
        for segment in self.coalesce().iter() {
            segment.write_ansi(out);
        }
    }

    /// Appends the text re-encoded with section-sign directives.
    ///
    /// Only style changes are encoded. When a change removes anything (a format, or the
    /// color changes or disappears), a `§r` is written first and the new state is encoded
    /// from scratch, so scanning the output reproduces the same styles. Formats are
    /// written bold, italic, underline, strikethrough, obfuscated, as the game does.
    pub fn write_legacy(&self, out: &mut String) {
        let mut last = StyleState::plain();
        for segment in &self.segments {
            let style = segment.style;
            if style != last {
                let removed = !style.formats.contains_all(last.formats)
                    || (last.color.is_some() && last.color != style.color);
                if removed {
                    push_directive(out, crate::consts::RESET_CODE);
                }
                if let Some(color) = style.color {
                    if removed || last.color != style.color {
                        push_directive(out, color.code());
                    }
                }
                for format in Format::LEGACY_ORDER {
                    if style.formats.contains(format)
                        && (removed || !last.formats.contains(format))
                    {
                        push_directive(out, format.code());
                    }
                }
                last = style;
            }
            out.push_str(&segment.text);
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn to_ansi(&self) -> String {
        let mut out = String::new();
        self.write_ansi(&mut out);
        out
    }

    pub fn to_legacy(&self) -> String {
        let mut out = String::new();
        self.write_legacy(&mut out);
        out
    }

    /// Renders the text in the requested format.
    pub fn render(&self, format: PreviewFormat) -> String {
        match format {
            PreviewFormat::Html => self.to_html(),
            PreviewFormat::Ansi => self.to_ansi(),
            PreviewFormat::Plain => self.plain_text(),
            PreviewFormat::Legacy => self.to_legacy(),
        }
    }
}

fn push_directive(out: &mut String, code: char) {
    out.push(SECTION_SIGN);
    out.push(code);
}

impl FromIterator<Segment> for SegmentedText {
    fn from_iter<T: IntoIterator<Item = Segment>>(iter: T) -> Self {
        SegmentedText {
            segments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for SegmentedText {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a SegmentedText {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Result of scanning section-sign coded text.
///
/// Text without a single visible character (empty input, or directives only) yields
/// [`ColorMarkup::NoVisibleText`] rather than an empty segment list, and renders as a
/// placeholder message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorMarkup {
    /// At least one visible segment.
    Visible(SegmentedText),
    /// Nothing visible to show.
    NoVisibleText,
}

impl ColorMarkup {
    /// Wraps scanned segments, substituting the empty marker for an empty sequence.
    pub fn from_segments(segments: SegmentedText) -> ColorMarkup {
        if segments.is_empty() {
            ColorMarkup::NoVisibleText
        } else {
            ColorMarkup::Visible(segments)
        }
    }

    /// The scanned segments. Empty for [`ColorMarkup::NoVisibleText`].
    pub fn segments(&self) -> &[Segment] {
        match self {
            ColorMarkup::Visible(text) => text.segments(),
            ColorMarkup::NoVisibleText => &[],
        }
    }

    /// Returns `true` for [`ColorMarkup::NoVisibleText`].
    pub fn is_empty(&self) -> bool {
        matches!(self, ColorMarkup::NoVisibleText)
    }

    pub fn into_text(self) -> SegmentedText {
        match self {
            ColorMarkup::Visible(text) => text,
            ColorMarkup::NoVisibleText => SegmentedText::empty(),
        }
    }

    /// The HTML preview: segments inside a `color-preview` container, or a muted
    /// placeholder when nothing is visible.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<div class=\"color-preview\">");
        match self {
            ColorMarkup::Visible(text) => text.write_html(&mut out),
            ColorMarkup::NoVisibleText => {
                out.push_str("<span style=\"color: var(--text-secondary);\">");
                out.push_str(NO_VISIBLE_TEXT);
                out.push_str("</span>");
            }
        }
        out.push_str("</div>");
        out
    }

    /// Renders the preview in the requested format. HTML is wrapped as by
    /// [`ColorMarkup::to_html`]; the other formats render the placeholder message as text.
    pub fn render(&self, format: PreviewFormat) -> String {
        match (self, format) {
            (_, PreviewFormat::Html) => self.to_html(),
            (ColorMarkup::Visible(text), format) => text.render(format),
            (ColorMarkup::NoVisibleText, PreviewFormat::Ansi) => {
                format!("{SGR_FAINT}{NO_VISIBLE_TEXT}{SGR_RESET}")
            }
            (ColorMarkup::NoVisibleText, _) => NO_VISIBLE_TEXT.to_string(),
        }
    }
}
