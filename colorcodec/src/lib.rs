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

//! Section-sign (`§`) chat formatting codes.
//!
//! [`scan_color_markup`] turns coded text into styled segments and
//! [`normalize_pattern`] rewrites `&`-marker patterns into `§` form.

mod config;
pub mod consts;
mod normalize;
mod scanner;
mod string;
mod style;
pub mod utility;

pub use self::config::{MarkupConfig, PreviewFormat};
pub use self::normalize::{
    NormalizedPattern, convert_alternate_markers, has_unescaped_marker, normalize_pattern,
};
pub use self::scanner::{ColorScanner, scan_color_markup, scan_color_markup_with};
pub use self::string::{ColorMarkup, Segment, SegmentedText};
pub use self::style::{Color, Directive, Format, Formats, StyleState};
pub use self::utility::{escape_html, strip_color_codes};
