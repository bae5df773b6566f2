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

//! Error types for the pattern tester

use crate::safety::UnsafeConstruct;
use thiserror::Error;

/// Result type for tester operations
pub type TesterResult<T> = std::result::Result<T, TesterError>;

/// Pattern tester error types
///
/// A pattern that compiles but finds nothing is not an error; see
/// [`MatchOutcome::NoMatch`](crate::MatchOutcome::NoMatch).
#[derive(Debug, Error)]
pub enum TesterError {
    /// The pattern was empty or whitespace only
    #[error("Please enter a regex pattern")]
    EmptyPattern,

    /// The normalized pattern failed to compile
    #[error("Invalid regex pattern: {message}")]
    InvalidPattern {
        /// The normalized pattern that was compiled
        pattern: String,
        /// The compiler's message, verbatim
        message: String,
    },

    /// The pattern exceeds the configured length limit, counted in UTF-16 code units
    #[error("Pattern too long: {length} characters (maximum allowed: {max})")]
    PatternTooLong { length: usize, max: usize },

    /// The pattern contains a construct prone to catastrophic backtracking
    #[error("Unsafe regex pattern ({construct}): {pattern}")]
    UnsafePattern {
        pattern: String,
        construct: UnsafeConstruct,
    },

    /// The pattern compiled but matching gave up, e.g. on the backtracking limit
    #[error("Pattern matching failed: {message}")]
    MatchFailed {
        /// The normalized pattern that was run
        pattern: String,
        /// The matcher's message, verbatim
        message: String,
    },

    /// Reading input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TesterError {
    /// Check if the error was caused by the pattern the user typed
    ///
    /// User errors are reported as a status message; everything else is an
    /// environment failure.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, TesterError::Io(_))
    }

    /// Check if the error was raised before the pattern reached the compiler
    pub fn is_rejected_before_compile(&self) -> bool {
        matches!(
            self,
            TesterError::EmptyPattern
                | TesterError::PatternTooLong { .. }
                | TesterError::UnsafePattern { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TesterError::EmptyPattern.to_string(),
            "Please enter a regex pattern"
        );
        let err = TesterError::InvalidPattern {
            pattern: "(".to_string(),
            message: "unclosed group".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid regex pattern: unclosed group");
        let err = TesterError::PatternTooLong {
            length: 600,
            max: 500,
        };
        assert_eq!(
            err.to_string(),
            "Pattern too long: 600 characters (maximum allowed: 500)"
        );
    }

    #[test]
    fn test_unsafe_pattern_names_the_construct() {
        let err = TesterError::UnsafePattern {
            pattern: "(a|b)+".to_string(),
            construct: UnsafeConstruct::QuantifiedAlternation,
        };
        assert_eq!(
            err.to_string(),
            "Unsafe regex pattern (quantified alternation): (a|b)+"
        );
        let err = TesterError::UnsafePattern {
            pattern: "(a+)+".to_string(),
            construct: UnsafeConstruct::NestedQuantifier,
        };
        assert_eq!(
            err.to_string(),
            "Unsafe regex pattern (nested quantifiers): (a+)+"
        );
    }

    #[test]
    fn test_match_failed_is_not_rejected_before_compile() {
        let err = TesterError::MatchFailed {
            pattern: "(a|b|ab)*(?=c)".to_string(),
            message: "Max limit for backtracking count exceeded".to_string(),
        };
        assert!(err.is_user_error());
        assert!(!err.is_rejected_before_compile());
        assert!(err.to_string().starts_with("Pattern matching failed: "));
    }

    #[test]
    fn test_error_is_user_error() {
        assert!(TesterError::EmptyPattern.is_user_error());
        assert!(
            TesterError::UnsafePattern {
                pattern: "(a+)+".to_string(),
                construct: UnsafeConstruct::NestedQuantifier,
            }
            .is_user_error()
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(!TesterError::from(io).is_user_error());
    }

    #[test]
    fn test_error_is_rejected_before_compile() {
        assert!(TesterError::EmptyPattern.is_rejected_before_compile());
        assert!(
            !TesterError::InvalidPattern {
                pattern: String::new(),
                message: String::new(),
            }
            .is_rejected_before_compile()
        );
    }
}
