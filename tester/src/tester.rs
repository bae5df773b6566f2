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

use crate::config::{MatchTarget, TesterConfig};
use crate::error::{TesterError, TesterResult};
use crate::safety::find_unsafe_construct;
use chatregex_colorcodec::{NormalizedPattern, normalize_pattern, strip_color_codes};
use fancy_regex::{Captures, Regex, RegexBuilder};
use std::borrow::Cow;
use tracing::{debug, instrument, warn};

/// Runs user patterns against sample chat text.
///
/// The tester owns no state besides its configuration. Each call normalizes the pattern,
/// picks the match target, compiles, and reports the first match.
///
/// Patterns are compiled with a backtracking engine, so backreferences (`(\w+) \1`) and
/// lookaround (`(?<!§7)Alex`) work as they do in the game.
///
/// # Examples
///
/// ```
/// use chatregex_tester::{MatchOutcome, PatternTester};
///
/// let tester = PatternTester::default();
/// let outcome = tester.test(r"&6\[(\w+)\]", "§6[Server]§r Restarting").unwrap();
/// match outcome {
///     MatchOutcome::Matched(report) => assert_eq!(report.group(1), Some("Server")),
///     MatchOutcome::NoMatch => unreachable!(),
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct PatternTester {
    config: TesterConfig,
}

impl PatternTester {
    pub fn new(config: TesterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TesterConfig {
        &self.config
    }

    /// Tests `pattern` against `text` and reports the first match.
    ///
    /// # Errors
    ///
    /// Returns [`TesterError::EmptyPattern`] for a blank pattern,
    /// [`TesterError::InvalidPattern`] when compilation fails,
    /// [`TesterError::MatchFailed`] when matching exceeds the backtracking limit, and the
    /// strict mode rejections when those checks are enabled.
    #[instrument(level = "debug", skip_all)]
    pub fn test(&self, pattern: &str, text: &str) -> TesterResult<MatchOutcome> {
        self.prepare(pattern)?.find(text)
    }

    /// Normalizes, screens and compiles a pattern for repeated use.
    pub fn prepare(&self, pattern: &str) -> TesterResult<PreparedPattern> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(TesterError::EmptyPattern);
        }

        let normalized = normalize_pattern(pattern);

        if let Some(max) = self.config.max_pattern_length {
            // The game measures Java string length.
            let length = normalized.normalized.encode_utf16().count();
            if length > max {
                warn!(length, max, "rejecting overlong pattern");
                return Err(TesterError::PatternTooLong { length, max });
            }
        }

        if self.config.reject_unsafe_patterns {
            if let Some(construct) = find_unsafe_construct(&normalized.normalized) {
                warn!(pattern, %construct, "rejecting unsafe regex pattern (potential ReDoS)");
                return Err(TesterError::UnsafePattern {
                    pattern: pattern.to_string(),
                    construct,
                });
            }
        }

        let target = self
            .config
            .match_target
            .resolve(normalized.uses_alternate_escape);

        let regex = RegexBuilder::new(&normalized.normalized)
            .case_insensitive(self.config.case_insensitive)
            .backtrack_limit(self.config.backtrack_limit)
            .build()
            .map_err(|error| {
                debug!(pattern = %normalized, %error, "pattern failed to compile");
                TesterError::InvalidPattern {
                    pattern: normalized.normalized.clone(),
                    message: error.to_string(),
                }
            })?;

        debug!(pattern = %normalized, ?target, "prepared pattern");
        Ok(PreparedPattern {
            normalized,
            target,
            regex,
        })
    }
}

/// A compiled pattern together with the match target it resolved to.
#[derive(Clone, Debug)]
pub struct PreparedPattern {
    normalized: NormalizedPattern,
    target: MatchTarget,
    regex: Regex,
}

impl PreparedPattern {
    pub fn normalized(&self) -> &NormalizedPattern {
        &self.normalized
    }

    /// The resolved target; never [`MatchTarget::Auto`].
    pub fn target(&self) -> MatchTarget {
        self.target
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// The form of `text` this pattern is matched against.
    pub fn haystack<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.target {
            MatchTarget::Stripped => strip_color_codes(text),
            MatchTarget::Raw | MatchTarget::Auto => Cow::Borrowed(text),
        }
    }

    /// Runs the pattern against `text`.
    ///
    /// # Errors
    ///
    /// Returns [`TesterError::MatchFailed`] when the engine gives up, e.g. on the
    /// backtracking limit.
    pub fn find(&self, text: &str) -> TesterResult<MatchOutcome> {
        let haystack = self.haystack(text);
        match self.regex.captures(&haystack) {
            Ok(Some(captures)) => Ok(MatchOutcome::Matched(MatchReport::from_captures(
                &captures,
            ))),
            Ok(None) => Ok(MatchOutcome::NoMatch),
            Err(error) => {
                warn!(pattern = %self.normalized, %error, "pattern matching failed");
                Err(TesterError::MatchFailed {
                    pattern: self.normalized.normalized.clone(),
                    message: error.to_string(),
                })
            }
        }
    }
}

/// The result of running a pattern that compiled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The pattern matched; the report holds the capture groups of the first match.
    Matched(MatchReport),
    /// The pattern ran and found nothing.
    NoMatch,
}

impl MatchOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    pub fn report(&self) -> Option<&MatchReport> {
        match self {
            MatchOutcome::Matched(report) => Some(report),
            MatchOutcome::NoMatch => None,
        }
    }
}

/// Capture groups of a match. Group 0 is the whole match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchReport {
    groups: Vec<Option<String>>,
}

impl MatchReport {
    /// Builds a report from explicit groups; `groups[0]` is the whole match.
    pub fn new(groups: Vec<Option<String>>) -> Self {
        Self { groups }
    }

    pub fn from_captures(captures: &Captures<'_>) -> Self {
        Self {
            groups: captures
                .iter()
                .map(|group| group.map(|m| m.as_str().to_string()))
                .collect(),
        }
    }

    /// The text of group `index`, or `None` if it does not exist or did not participate.
    pub fn group(&self, index: usize) -> Option<&str> {
        self.groups.get(index)?.as_deref()
    }

    /// The whole match.
    pub fn matched(&self) -> &str {
        self.group(0).unwrap_or_default()
    }

    /// Number of groups including group 0.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn groups(&self) -> &[Option<String>] {
        &self.groups
    }

    /// One `$N: "text"` line per group. Groups that did not participate show `(unmatched)`.
    pub fn format_groups(&self) -> String {
        self.groups
            .iter()
            .enumerate()
            .map(|(index, group)| match group {
                Some(text) => format!("${index}: \"{text}\""),
                None => format!("${index}: (unmatched)"),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
