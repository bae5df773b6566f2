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

/// Scanner behavior settings.
///
/// # Examples
///
/// ```
/// use chatregex_colorcodec::{MarkupConfig, scan_color_markup_with};
///
/// // The in-game client drops bold when a color follows it.
/// let markup = scan_color_markup_with("§l§aHi", &MarkupConfig::vanilla());
/// assert!(markup.segments()[0].style.formats.is_empty());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarkupConfig {
    /// A color directive also clears active formatting attributes
    pub color_resets_formatting: bool,
}

impl MarkupConfig {
    /// Colors replace colors, formats accumulate until a reset
    pub fn preview() -> MarkupConfig {
        MarkupConfig {
            color_resets_formatting: false,
        }
    }

    /// Colors clear formats, as the game client renders them
    pub fn vanilla() -> MarkupConfig {
        MarkupConfig {
            color_resets_formatting: true,
        }
    }

    /// Set whether a color directive clears formatting attributes
    pub fn with_color_resets_formatting(mut self, enabled: bool) -> Self {
        self.color_resets_formatting = enabled;
        self
    }
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self::preview()
    }
}

/// Output representations a [`SegmentedText`](crate::SegmentedText) can be rendered to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PreviewFormat {
    /// HTML `<span>` elements carrying `color-*` classes.
    Html,
    /// Terminal text with ANSI SGR sequences.
    Ansi,
    /// Visible characters only.
    Plain,
    /// Section-sign coded text.
    Legacy,
}

impl PreviewFormat {
    /// Returns `true` if this format carries style information.
    pub fn is_styled(&self) -> bool {
        !matches!(self, PreviewFormat::Plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_preview() {
        assert_eq!(MarkupConfig::default(), MarkupConfig::preview());
        assert!(!MarkupConfig::default().color_resets_formatting);
    }

    #[test]
    fn test_builder() {
        let config = MarkupConfig::preview().with_color_resets_formatting(true);
        assert_eq!(config, MarkupConfig::vanilla());
    }

    #[test]
    fn test_preview_format_is_styled() {
        assert!(PreviewFormat::Html.is_styled());
        assert!(PreviewFormat::Ansi.is_styled());
        assert!(PreviewFormat::Legacy.is_styled());
        assert!(!PreviewFormat::Plain.is_styled());
    }
}
