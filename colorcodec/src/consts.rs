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

/// Canonical escape character introducing a formatting directive (`§`, U+00A7).
pub const SECTION_SIGN: char = '\u{00A7}';

/// ASCII stand-in for [`SECTION_SIGN`] accepted in user supplied patterns and templates.
pub const ALTERNATE_MARKER: char = '&';

/// Character that escapes an [`ALTERNATE_MARKER`] so it is kept literally.
pub const MARKER_ESCAPE: char = '\\';

/// Directive code that clears every active style.
pub const RESET_CODE: char = 'r';

/// Reset sequence written with the alternate marker. Removed from patterns before matching.
pub const ALTERNATE_RESET: &str = "&r";

/// Message rendered in place of a preview that has no visible characters.
pub const NO_VISIBLE_TEXT: &str = "No visible text";
