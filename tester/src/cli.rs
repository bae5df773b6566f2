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

//! Command line arguments for the `chatregex` binary.

use crate::config::{MatchTarget, TesterConfig};
use crate::error::TesterResult;
use chatregex_colorcodec::{MarkupConfig, PreviewFormat};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

/// Test chat notification patterns against section-sign coded chat text
#[derive(Parser, Debug, Clone)]
#[command(name = "chatregex", version, about)]
pub struct Cli {
    /// Pattern to test; `&` may stand in for `§`, `\&` is a literal `&`
    #[arg(short, long)]
    pub pattern: String,

    /// Sample chat text (reads stdin when neither --text nor --text-file is given)
    #[arg(short, long, conflicts_with = "text_file")]
    pub text: Option<String>,

    /// Read the sample chat text from a file
    #[arg(long, value_name = "PATH")]
    pub text_file: Option<PathBuf>,

    /// Which form of the text the pattern is matched against [default: auto, raw with --strict]
    #[arg(long, value_enum)]
    pub match_target: Option<CliMatchTarget>,

    /// Match case-sensitively
    #[arg(long)]
    pub case_sensitive: bool,

    /// Match like the in-game matcher: raw text plus its pattern limits
    #[arg(long)]
    pub strict: bool,

    /// Colors clear formatting in the preview, as in the game client
    #[arg(long)]
    pub vanilla: bool,

    /// Preview output format
    #[arg(long, value_enum, default_value = "ansi")]
    pub preview: CliPreviewFormat,

    /// Template expanded with the capture groups of a match, e.g. `&6Hello $1`
    #[arg(long)]
    pub template: Option<String>,
}

impl Cli {
    pub fn tester_config(&self) -> TesterConfig {
        let base = if self.strict {
            TesterConfig::strict()
        } else {
            TesterConfig::default()
        };
        let base = match &self.match_target {
            Some(target) => base.with_match_target(target.clone().into()),
            None => base,
        };
        base.with_case_insensitive(!self.case_sensitive)
    }

    pub fn markup_config(&self) -> MarkupConfig {
        MarkupConfig::preview().with_color_resets_formatting(self.vanilla)
    }

    /// The preview format, or `None` when the preview is disabled.
    pub fn preview_format(&self) -> Option<PreviewFormat> {
        self.preview.clone().into()
    }

    /// Loads the sample text from the argument, the file, or stdin.
    ///
    /// # Errors
    ///
    /// Returns [`TesterError::Io`](crate::TesterError::Io) when the file or stdin
    /// cannot be read.
    pub fn read_text(&self) -> TesterResult<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        let mut text = match &self.text_file {
            Some(path) => std::fs::read_to_string(path)?,
            None => {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                text
            }
        };
        trim_line_ending(&mut text);
        Ok(text)
    }
}

/// Drops one trailing line ending, as left by `echo` or an editor.
fn trim_line_ending(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

/// CLI-friendly match target enum
#[derive(Clone, Debug, ValueEnum)]
pub enum CliMatchTarget {
    /// Raw text if the pattern uses `&` markers, stripped text otherwise
    Auto,
    /// Text with formatting codes
    Raw,
    /// Text without formatting codes
    Stripped,
}

impl From<CliMatchTarget> for MatchTarget {
    fn from(target: CliMatchTarget) -> Self {
        match target {
            CliMatchTarget::Auto => MatchTarget::Auto,
            CliMatchTarget::Raw => MatchTarget::Raw,
            CliMatchTarget::Stripped => MatchTarget::Stripped,
        }
    }
}

/// CLI-friendly preview format enum
#[derive(Clone, Debug, ValueEnum)]
pub enum CliPreviewFormat {
    /// HTML spans with color classes
    Html,
    /// Terminal colors
    Ansi,
    /// Visible text only
    Plain,
    /// Section-sign codes
    Legacy,
    /// No preview
    None,
}

impl From<CliPreviewFormat> for Option<PreviewFormat> {
    fn from(format: CliPreviewFormat) -> Self {
        match format {
            CliPreviewFormat::Html => Some(PreviewFormat::Html),
            CliPreviewFormat::Ansi => Some(PreviewFormat::Ansi),
            CliPreviewFormat::Plain => Some(PreviewFormat::Plain),
            CliPreviewFormat::Legacy => Some(PreviewFormat::Legacy),
            CliPreviewFormat::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("chatregex").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--pattern", "hi", "--text", "hi"]);
        assert_eq!(cli.tester_config(), TesterConfig::default());
        assert_eq!(cli.markup_config(), MarkupConfig::preview());
        assert_eq!(cli.preview_format(), Some(PreviewFormat::Ansi));
        assert_eq!(cli.read_text().unwrap(), "hi");
    }

    #[test]
    fn test_flags() {
        let cli = parse(&[
            "-p",
            "&a(\\w+)",
            "-t",
            "§aHi",
            "--match-target",
            "stripped",
            "--case-sensitive",
            "--strict",
            "--vanilla",
            "--preview",
            "none",
            "--template",
            "hey $1",
        ]);
        let config = cli.tester_config();
        assert_eq!(config.match_target, MatchTarget::Stripped);
        assert!(!config.case_insensitive);
        assert_eq!(config.max_pattern_length, Some(500));
        assert_eq!(cli.markup_config(), MarkupConfig::vanilla());
        assert_eq!(cli.preview_format(), None);
        assert_eq!(cli.template.as_deref(), Some("hey $1"));
    }

    #[test]
    fn test_strict_defaults_to_raw_target() {
        let cli = parse(&["-p", "x", "-t", "x", "--strict"]);
        assert_eq!(cli.tester_config(), TesterConfig::strict());
        assert_eq!(cli.tester_config().match_target, MatchTarget::Raw);
    }

    #[test]
    fn test_pattern_is_required() {
        assert!(Cli::try_parse_from(["chatregex", "--text", "x"]).is_err());
    }

    #[test]
    fn test_text_and_file_conflict() {
        assert!(
            Cli::try_parse_from(["chatregex", "-p", "x", "-t", "x", "--text-file", "f"]).is_err()
        );
    }

    #[test]
    fn test_trim_line_ending() {
        let mut text = "§aHi\r\n".to_string();
        trim_line_ending(&mut text);
        assert_eq!(text, "§aHi");
        let mut text = "two\n\n".to_string();
        trim_line_ending(&mut text);
        assert_eq!(text, "two\n");
    }

    #[test]
    fn test_missing_text_file_is_io_error() {
        let cli = parse(&["-p", "x", "--text-file", "/nonexistent/chatregex/sample.txt"]);
        assert!(matches!(cli.read_text(), Err(crate::TesterError::Io(_))));
    }
}
