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

//! Display model for tester results.
//!
//! Front ends turn a [`TesterResult`] into a [`TestReport`] and show its status,
//! message and capture text. The report owns no behavior beyond that mapping.

use crate::error::{TesterError, TesterResult};
use crate::tester::MatchOutcome;
use chatregex_colorcodec::{
    Color, MarkupConfig, PreviewFormat, Segment, StyleState, scan_color_markup_with,
};

/// Shown instead of a preview while the sample text is empty.
pub const ENTER_TEXT_PLACEHOLDER: &str = "Enter text to see color preview";

/// Shown in place of capture groups when nothing matched.
pub const NO_CAPTURES_PLACEHOLDER: &str = "No capture groups (no match found)";

/// Shown in place of capture groups when the pattern was rejected.
pub const PATTERN_ERROR_PLACEHOLDER: &str = "Cannot extract capture groups due to regex error";

/// Severity of a test result.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    /// The pattern matched.
    Success,
    /// The pattern ran but did not match.
    Warning,
    /// The pattern could not be run.
    Error,
}

impl Status {
    /// CSS class of the result box for this status.
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Success => "result-box success",
            Status::Warning => "result-box warning",
            Status::Error => "result-box error",
        }
    }

    /// Style used when printing this status to a terminal.
    pub fn style(&self) -> StyleState {
        let color = match self {
            Status::Success => Color::Green,
            Status::Warning => Color::Yellow,
            Status::Error => Color::Red,
        };
        StyleState::plain().with_color(color)
    }

    /// `message` wrapped in this status' terminal style.
    pub fn paint(&self, message: &str) -> String {
        let mut out = String::new();
        Segment::new(message, self.style()).write_ansi(&mut out);
        out
    }
}

/// What a front end shows for one test run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestReport {
    pub status: Status,
    pub message: String,
    /// Capture group listing or placeholder. `None` leaves the capture display untouched.
    pub captures: Option<String>,
}

impl TestReport {
    pub fn from_result(result: &TesterResult<MatchOutcome>) -> TestReport {
        match result {
            Ok(MatchOutcome::Matched(report)) => TestReport {
                status: Status::Success,
                message: "Pattern matches!".to_string(),
                captures: Some(report.format_groups()),
            },
            Ok(MatchOutcome::NoMatch) => TestReport {
                status: Status::Warning,
                message: "Pattern does not match".to_string(),
                captures: Some(NO_CAPTURES_PLACEHOLDER.to_string()),
            },
            Err(error @ (TesterError::EmptyPattern | TesterError::Io(_))) => TestReport {
                status: Status::Error,
                message: error.to_string(),
                captures: None,
            },
            Err(error) => TestReport {
                status: Status::Error,
                message: error.to_string(),
                captures: Some(PATTERN_ERROR_PLACEHOLDER.to_string()),
            },
        }
    }
}

/// Renders the colorized preview of sample text.
///
/// Empty text renders [`ENTER_TEXT_PLACEHOLDER`]; text without visible characters renders
/// the scanner's "No visible text" marker.
pub fn render_preview(text: &str, format: PreviewFormat, config: &MarkupConfig) -> String {
    if text.is_empty() {
        return match format {
            PreviewFormat::Html => format!(
                "<span style=\"color: var(--text-secondary);\">{ENTER_TEXT_PLACEHOLDER}</span>"
            ),
            _ => ENTER_TEXT_PLACEHOLDER.to_string(),
        };
    }
    scan_color_markup_with(text, config).render(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tester::MatchReport;

    #[test]
    fn test_report_for_match() {
        let report = MatchReport::new(vec![Some("hi".to_string()), Some("h".to_string())]);
        let result = Ok(MatchOutcome::Matched(report));
        let shown = TestReport::from_result(&result);
        assert_eq!(shown.status, Status::Success);
        assert_eq!(shown.message, "Pattern matches!");
        assert_eq!(shown.captures.as_deref(), Some("$0: \"hi\"\n$1: \"h\""));
    }

    #[test]
    fn test_report_for_no_match() {
        let shown = TestReport::from_result(&Ok(MatchOutcome::NoMatch));
        assert_eq!(shown.status, Status::Warning);
        assert_eq!(shown.message, "Pattern does not match");
        assert_eq!(shown.captures.as_deref(), Some(NO_CAPTURES_PLACEHOLDER));
    }

    #[test]
    fn test_report_for_empty_pattern() {
        let shown = TestReport::from_result(&Err(TesterError::EmptyPattern));
        assert_eq!(shown.status, Status::Error);
        assert_eq!(shown.message, "Please enter a regex pattern");
        assert_eq!(shown.captures, None);
    }

    #[test]
    fn test_report_for_invalid_pattern() {
        let result = Err(TesterError::InvalidPattern {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        });
        let shown = TestReport::from_result(&result);
        assert_eq!(shown.status, Status::Error);
        assert_eq!(shown.message, "Invalid regex pattern: unclosed group");
        assert_eq!(shown.captures.as_deref(), Some(PATTERN_ERROR_PLACEHOLDER));
    }

    #[test]
    fn test_status_css_class() {
        assert_eq!(Status::Success.css_class(), "result-box success");
        assert_eq!(Status::Warning.css_class(), "result-box warning");
        assert_eq!(Status::Error.css_class(), "result-box error");
    }

    #[test]
    fn test_status_paint() {
        assert_eq!(Status::Error.paint("bad"), "\x1b[91mbad\x1b[0m");
        assert_eq!(Status::Success.paint("ok"), "\x1b[92mok\x1b[0m");
    }

    #[test]
    fn test_preview_placeholder_for_empty_text() {
        let config = MarkupConfig::default();
        assert_eq!(
            render_preview("", PreviewFormat::Plain, &config),
            ENTER_TEXT_PLACEHOLDER
        );
        assert!(render_preview("", PreviewFormat::Html, &config).contains(ENTER_TEXT_PLACEHOLDER));
    }

    #[test]
    fn test_preview_of_directives_only() {
        let config = MarkupConfig::default();
        assert_eq!(
            render_preview("§k§k", PreviewFormat::Plain, &config),
            "No visible text"
        );
    }

    #[test]
    fn test_preview_of_text() {
        let config = MarkupConfig::default();
        assert_eq!(
            render_preview("§ahi", PreviewFormat::Html, &config),
            "<div class=\"color-preview\"><span class=\"color-green\">h</span><span class=\"color-green\">i</span></div>"
        );
    }
}
