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

//! Regex tester for section-sign coded chat text.
//!
//! Patterns may use `&` in place of `§`. A pattern that does is matched against the
//! chat text with its formatting codes; any other pattern is matched against the
//! visible text only.

pub mod cli;
mod config;
mod error;
mod report;
mod safety;
mod template;
mod tester;

pub use self::config::{
    DEFAULT_BACKTRACK_LIMIT, DEFAULT_MAX_PATTERN_LENGTH, MatchTarget, TesterConfig,
};
pub use self::error::{TesterError, TesterResult};
pub use self::report::{
    ENTER_TEXT_PLACEHOLDER, NO_CAPTURES_PLACEHOLDER, PATTERN_ERROR_PLACEHOLDER, Status,
    TestReport, render_preview,
};
pub use self::safety::{UnsafeConstruct, find_unsafe_construct, is_pattern_safe};
pub use self::template::expand_template;
pub use self::tester::{MatchOutcome, MatchReport, PatternTester, PreparedPattern};
pub use chatregex_colorcodec::{MarkupConfig, PreviewFormat};
