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

//! Style model for section-sign coded text.
//!
//! A formatting directive is the two character unit `§<code>`. The code selects one of
//! sixteen [`Color`]s, one of five [`Format`] attributes, or a reset. The [`StyleState`]
//! tracks what is active while text is scanned.

use crate::config::MarkupConfig;
use crate::consts::RESET_CODE;

/// One of the sixteen chat colors, selected by the codes `0`-`9` and `a`-`f`.
///
/// # Examples
///
/// ```
/// use chatregex_colorcodec::Color;
///
/// assert_eq!(Color::from_code('a'), Some(Color::Green));
/// assert_eq!(Color::from_code('A'), Some(Color::Green));
/// assert_eq!(Color::Green.class_name(), "color-green");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Color {
    /// Black - Code `0`.
    Black,
    /// Dark Blue - Code `1`.
    DarkBlue,
    /// Dark Green - Code `2`.
    DarkGreen,
    /// Dark Aqua - Code `3`.
    DarkAqua,
    /// Dark Red - Code `4`.
    DarkRed,
    /// Dark Purple - Code `5`.
    DarkPurple,
    /// Gold - Code `6`.
    Gold,
    /// Gray - Code `7`.
    Gray,
    /// Dark Gray - Code `8`.
    DarkGray,
    /// Blue - Code `9`.
    Blue,
    /// Green - Code `a`.
    Green,
    /// Aqua - Code `b`.
    Aqua,
    /// Red - Code `c`.
    Red,
    /// Light Purple - Code `d`.
    LightPurple,
    /// Yellow - Code `e`.
    Yellow,
    /// White - Code `f`.
    White,
}

impl Color {
    /// Every color in code order.
    pub const ALL: [Color; 16] = [
        Color::Black,
        Color::DarkBlue,
        Color::DarkGreen,
        Color::DarkAqua,
        Color::DarkRed,
        Color::DarkPurple,
        Color::Gold,
        Color::Gray,
        Color::DarkGray,
        Color::Blue,
        Color::Green,
        Color::Aqua,
        Color::Red,
        Color::LightPurple,
        Color::Yellow,
        Color::White,
    ];

    /// Looks up the color selected by a directive code. The code is case-insensitive.
    pub fn from_code(code: char) -> Option<Color> {
        let index = code.to_ascii_lowercase().to_digit(16)?;
        Self::ALL.get(index as usize).copied()
    }

    /// The lowercase directive code selecting this color.
    pub fn code(self) -> char {
        // `ALL` is indexed by the hex digit of the code.
        char::from_digit(self as u32, 16).unwrap_or('f')
    }

    /// The kebab-case name of this color, e.g. `dark-aqua`.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::DarkBlue => "dark-blue",
            Color::DarkGreen => "dark-green",
            Color::DarkAqua => "dark-aqua",
            Color::DarkRed => "dark-red",
            Color::DarkPurple => "dark-purple",
            Color::Gold => "gold",
            Color::Gray => "gray",
            Color::DarkGray => "dark-gray",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Aqua => "aqua",
            Color::Red => "red",
            Color::LightPurple => "light-purple",
            Color::Yellow => "yellow",
            Color::White => "white",
        }
    }

    /// The CSS class used for this color in HTML previews.
    pub fn class_name(self) -> &'static str {
        match self {
            Color::Black => "color-black",
            Color::DarkBlue => "color-dark-blue",
            Color::DarkGreen => "color-dark-green",
            Color::DarkAqua => "color-dark-aqua",
            Color::DarkRed => "color-dark-red",
            Color::DarkPurple => "color-dark-purple",
            Color::Gold => "color-gold",
            Color::Gray => "color-gray",
            Color::DarkGray => "color-dark-gray",
            Color::Blue => "color-blue",
            Color::Green => "color-green",
            Color::Aqua => "color-aqua",
            Color::Red => "color-red",
            Color::LightPurple => "color-light-purple",
            Color::Yellow => "color-yellow",
            Color::White => "color-white",
        }
    }

    /// The nearest foreground SGR parameter in the ANSI 16 color palette.
    pub fn sgr_foreground(self) -> u8 {
        match self {
            Color::Black => 30,
            Color::DarkRed => 31,
            Color::DarkGreen => 32,
            Color::Gold => 33,
            Color::DarkBlue => 34,
            Color::DarkPurple => 35,
            Color::DarkAqua => 36,
            Color::Gray => 37,
            Color::DarkGray => 90,
            Color::Red => 91,
            Color::Green => 92,
            Color::Yellow => 93,
            Color::Blue => 94,
            Color::LightPurple => 95,
            Color::Aqua => 96,
            Color::White => 97,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A text formatting attribute, selected by the codes `k`-`o`.
///
/// Formats accumulate: activating one never deactivates another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub enum Format {
    /// Obfuscated (randomly cycling glyphs) - Code `k`.
    Obfuscated,
    /// Bold - Code `l`.
    Bold,
    /// Strikethrough - Code `m`.
    Strikethrough,
    /// Underline - Code `n`.
    Underline,
    /// Italic - Code `o`.
    Italic,
}

impl Format {
    /// Every format in code order.
    pub const ALL: [Format; 5] = [
        Format::Obfuscated,
        Format::Bold,
        Format::Strikethrough,
        Format::Underline,
        Format::Italic,
    ];

    /// The order in which the game's legacy text encoder writes formats.
    pub const LEGACY_ORDER: [Format; 5] = [
        Format::Bold,
        Format::Italic,
        Format::Underline,
        Format::Strikethrough,
        Format::Obfuscated,
    ];

    /// Looks up the format selected by a directive code. The code is case-insensitive.
    pub fn from_code(code: char) -> Option<Format> {
        match code.to_ascii_lowercase() {
            'k' => Some(Format::Obfuscated),
            'l' => Some(Format::Bold),
            'm' => Some(Format::Strikethrough),
            'n' => Some(Format::Underline),
            'o' => Some(Format::Italic),
            _ => None,
        }
    }

    /// The lowercase directive code selecting this format.
    pub fn code(self) -> char {
        match self {
            Format::Obfuscated => 'k',
            Format::Bold => 'l',
            Format::Strikethrough => 'm',
            Format::Underline => 'n',
            Format::Italic => 'o',
        }
    }

    /// The lowercase name of this format.
    pub fn name(self) -> &'static str {
        match self {
            Format::Obfuscated => "obfuscated",
            Format::Bold => "bold",
            Format::Strikethrough => "strikethrough",
            Format::Underline => "underline",
            Format::Italic => "italic",
        }
    }

    /// The CSS class used for this format in HTML previews.
    pub fn class_name(self) -> &'static str {
        match self {
            Format::Obfuscated => "color-obfuscated",
            Format::Bold => "color-bold",
            Format::Strikethrough => "color-strikethrough",
            Format::Underline => "color-underline",
            Format::Italic => "color-italic",
        }
    }

    /// The SGR parameter enabling this attribute on a terminal.
    pub fn sgr_parameter(self) -> u8 {
        match self {
            Format::Bold => 1,
            Format::Italic => 3,
            Format::Underline => 4,
            // Slow blink is the closest terminal analogue to cycling glyphs.
            Format::Obfuscated => 5,
            Format::Strikethrough => 9,
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A deduplicated set of [`Format`]s. Iterates in code order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Formats(u8);

impl Formats {
    /// An empty set.
    pub const fn empty() -> Formats {
        Formats(0)
    }

    /// Adds a format. Returns `false` if it was already present.
    pub fn insert(&mut self, format: Format) -> bool {
        let present = self.contains(format);
        self.0 |= format.bit();
        !present
    }

    /// Removes a format. Returns `false` if it was not present.
    pub fn remove(&mut self, format: Format) -> bool {
        let present = self.contains(format);
        self.0 &= !format.bit();
        present
    }

    pub fn contains(&self, format: Format) -> bool {
        self.0 & format.bit() != 0
    }

    /// Returns `true` when every format in `other` is also in `self`.
    pub fn contains_all(&self, other: Formats) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    /// Iterates the contained formats in code order (`k` through `o`).
    pub fn iter(&self) -> impl Iterator<Item = Format> + '_ {
        Format::ALL.into_iter().filter(|format| self.contains(*format))
    }
}

impl FromIterator<Format> for Formats {
    fn from_iter<T: IntoIterator<Item = Format>>(iter: T) -> Self {
        let mut formats = Formats::empty();
        for format in iter {
            formats.insert(format);
        }
        formats
    }
}

/// A parsed formatting directive: the meaning of the code following a `§`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `§r` - Clear every active style.
    Reset,
    /// `§0`-`§f` - Replace the active color.
    Color(Color),
    /// `§k`-`§o` - Activate a formatting attribute.
    Format(Format),
    /// Any other code. Consumed without effect.
    Unknown(char),
}

impl Directive {
    /// Classifies a directive code. Codes are case-insensitive.
    ///
    /// ```
    /// use chatregex_colorcodec::{Color, Directive, Format};
    ///
    /// assert_eq!(Directive::from_code('R'), Directive::Reset);
    /// assert_eq!(Directive::from_code('c'), Directive::Color(Color::Red));
    /// assert_eq!(Directive::from_code('L'), Directive::Format(Format::Bold));
    /// assert_eq!(Directive::from_code('z'), Directive::Unknown('z'));
    /// ```
    pub fn from_code(code: char) -> Directive {
        let code = code.to_ascii_lowercase();
        if code == RESET_CODE {
            Directive::Reset
        } else if let Some(color) = Color::from_code(code) {
            Directive::Color(color)
        } else if let Some(format) = Format::from_code(code) {
            Directive::Format(format)
        } else {
            Directive::Unknown(code)
        }
    }

    /// The lowercase code of this directive.
    pub fn code(&self) -> char {
        match self {
            Directive::Reset => RESET_CODE,
            Directive::Color(color) => color.code(),
            Directive::Format(format) => format.code(),
            Directive::Unknown(code) => *code,
        }
    }
}

/// The styles active at one point of a scan.
///
/// At most one color is active at a time. Formats accumulate and are deduplicated.
/// `StyleState` is `Copy`, so a [`Segment`](crate::Segment) holds a snapshot that later
/// directives can never alter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    /// The active color, if any.
    pub color: Option<Color>,
    /// The active formatting attributes.
    pub formats: Formats,
}

impl StyleState {
    /// A state with nothing active.
    pub const fn plain() -> StyleState {
        StyleState {
            color: None,
            formats: Formats::empty(),
        }
    }

    /// Returns a copy with `color` active.
    pub fn with_color(mut self, color: Color) -> StyleState {
        self.color = Some(color);
        self
    }

    /// Returns a copy with `format` added.
    pub fn with_format(mut self, format: Format) -> StyleState {
        self.formats.insert(format);
        self
    }

    /// Returns `true` when no color and no format is active.
    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.formats.is_empty()
    }

    /// Applies a directive to this state.
    pub fn apply(&mut self, directive: Directive, config: &MarkupConfig) {
        match directive {
            Directive::Reset => *self = StyleState::plain(),
            Directive::Color(color) => {
                if config.color_resets_formatting {
                    self.formats.clear();
                }
                self.color = Some(color);
            }
            Directive::Format(format) => {
                self.formats.insert(format);
            }
            Directive::Unknown(_) => {}
        }
    }

    /// CSS classes for this state: the color first, then formats in code order.
    pub fn class_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.color
            .map(Color::class_name)
            .into_iter()
            .chain(self.formats.iter().map(Format::class_name))
    }

    /// The `class` attribute value for this state, classes separated by single spaces.
    pub fn class_attr(&self) -> String {
        self.class_names().collect::<Vec<_>>().join(" ")
    }

    /// The SGR parameters selecting this state on a terminal.
    pub fn sgr_parameters(&self) -> Vec<u8> {
        self.color
            .map(Color::sgr_foreground)
            .into_iter()
            .chain(self.formats.iter().map(Format::sgr_parameter))
            .collect()
    }
}
