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

//! Pattern tester configuration
//!
//! # Examples
//!
//! ```
//! use chatregex_tester::{MatchTarget, TesterConfig};
//!
//! let config = TesterConfig::strict()
//!     .with_match_target(MatchTarget::Auto)
//!     .with_case_insensitive(false);
//! ```

/// Maximum pattern length accepted by the in-game notification matcher.
pub const DEFAULT_MAX_PATTERN_LENGTH: usize = 500;

/// Backtracking steps a single match may take before it is abandoned.
pub const DEFAULT_BACKTRACK_LIMIT: usize = 1_000_000;

/// Which form of the sample text a pattern is matched against.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum MatchTarget {
    /// Raw text when the pattern used an unescaped `&`, stripped text otherwise.
    #[default]
    Auto,
    /// The text exactly as given, formatting directives included.
    Raw,
    /// The text with every formatting directive removed.
    Stripped,
}

impl MatchTarget {
    /// Resolves [`MatchTarget::Auto`] against the pattern's marker usage.
    pub fn resolve(self, uses_alternate_escape: bool) -> MatchTarget {
        match self {
            MatchTarget::Auto if uses_alternate_escape => MatchTarget::Raw,
            MatchTarget::Auto => MatchTarget::Stripped,
            target => target,
        }
    }
}

/// Pattern tester settings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TesterConfig {
    /// How the match target is chosen
    pub match_target: MatchTarget,

    /// Compile patterns case-insensitively
    pub case_insensitive: bool,

    /// Reject patterns longer than this many UTF-16 code units (None for no limit)
    pub max_pattern_length: Option<usize>,

    /// Reject patterns with nested quantifiers or quantified alternations
    pub reject_unsafe_patterns: bool,

    /// Backtracking steps allowed per match
    pub backtrack_limit: usize,
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            match_target: MatchTarget::Auto,
            case_insensitive: true,
            max_pattern_length: None,
            reject_unsafe_patterns: false,
            backtrack_limit: DEFAULT_BACKTRACK_LIMIT,
        }
    }
}

impl TesterConfig {
    /// Behave like the in-game notification matcher.
    ///
    /// Patterns are length-limited and screened, and always run against the raw text
    /// with its formatting codes, as the game matches the legacy form of a message.
    pub fn strict() -> Self {
        Self {
            match_target: MatchTarget::Raw,
            max_pattern_length: Some(DEFAULT_MAX_PATTERN_LENGTH),
            reject_unsafe_patterns: true,
            ..Self::default()
        }
    }

    /// Set the match target
    pub fn with_match_target(mut self, match_target: MatchTarget) -> Self {
        self.match_target = match_target;
        self
    }

    /// Enable or disable case-insensitive matching
    pub fn with_case_insensitive(mut self, enabled: bool) -> Self {
        self.case_insensitive = enabled;
        self
    }

    /// Set the pattern length limit
    pub fn with_max_pattern_length(mut self, max: Option<usize>) -> Self {
        self.max_pattern_length = max;
        self
    }

    /// Enable or disable the nested quantifier check
    pub fn with_reject_unsafe_patterns(mut self, enabled: bool) -> Self {
        self.reject_unsafe_patterns = enabled;
        self
    }

    /// Set the backtracking limit per match
    pub fn with_backtrack_limit(mut self, limit: usize) -> Self {
        self.backtrack_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TesterConfig::default();
        assert_eq!(config.match_target, MatchTarget::Auto);
        assert!(config.case_insensitive);
        assert_eq!(config.max_pattern_length, None);
        assert!(!config.reject_unsafe_patterns);
        assert_eq!(config.backtrack_limit, DEFAULT_BACKTRACK_LIMIT);
    }

    #[test]
    fn test_strict_config() {
        let config = TesterConfig::strict();
        assert_eq!(config.max_pattern_length, Some(500));
        assert!(config.reject_unsafe_patterns);
        assert!(config.case_insensitive);
        assert_eq!(config.match_target, MatchTarget::Raw);
    }

    #[test]
    fn test_builder_chain() {
        let config = TesterConfig::default()
            .with_match_target(MatchTarget::Stripped)
            .with_case_insensitive(false)
            .with_max_pattern_length(Some(10))
            .with_reject_unsafe_patterns(true)
            .with_backtrack_limit(10);
        assert_eq!(config.backtrack_limit, 10);
        assert_eq!(config.match_target, MatchTarget::Stripped);
        assert!(!config.case_insensitive);
        assert_eq!(config.max_pattern_length, Some(10));
        assert!(config.reject_unsafe_patterns);
    }

    #[test]
    fn test_match_target_resolve() {
        assert_eq!(MatchTarget::Auto.resolve(true), MatchTarget::Raw);
        assert_eq!(MatchTarget::Auto.resolve(false), MatchTarget::Stripped);
        assert_eq!(MatchTarget::Raw.resolve(false), MatchTarget::Raw);
        assert_eq!(MatchTarget::Stripped.resolve(true), MatchTarget::Stripped);
    }
}
