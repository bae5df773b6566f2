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

//! `chatregex` binary entry point.
//!
//! Usage:
//! ```bash
//! chatregex --pattern '&6\[(\w+)\]' --text '§6[Server]§r Restarting'
//! echo '§cError§r: disk full' | chatregex -p 'error: (.*)' --preview html
//! RUST_LOG=chatregex_tester=debug chatregex -p '&a(\w+)' -t '§aHi'
//! ```

use chatregex_colorcodec::convert_alternate_markers;
use chatregex_tester::cli::Cli;
use chatregex_tester::{
    MatchOutcome, PatternTester, PreviewFormat, Status, TestReport, expand_template,
    render_preview,
};
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let colorize = std::io::stdout().is_terminal();

    let text = match cli.read_text() {
        Ok(text) => text,
        Err(error) => {
            tracing::error!("Failed to read sample text: {}", error);
            eprintln!("{}", paint(Status::Error, &error.to_string(), colorize));
            return ExitCode::from(2);
        }
    };

    let tester = PatternTester::new(cli.tester_config());
    let result = tester.test(&cli.pattern, &text);
    let report = TestReport::from_result(&result);

    println!("{}", paint(report.status, &report.message, colorize));
    if let Some(captures) = &report.captures {
        println!("{}", captures);
    }

    // Terminal styling is only used when stdout is a terminal.
    let text_format = if colorize {
        PreviewFormat::Ansi
    } else {
        PreviewFormat::Plain
    };
    let markup_config = cli.markup_config();

    if let (Some(template), Ok(MatchOutcome::Matched(groups))) = (&cli.template, &result) {
        let expanded = convert_alternate_markers(&expand_template(template, groups));
        tracing::debug!(template = %template, expanded = %expanded, "expanded template");
        println!();
        println!("Template:");
        println!("{}", render_preview(&expanded, text_format, &markup_config));
    }

    if let Some(format) = cli.preview_format() {
        let format = match format {
            PreviewFormat::Ansi => text_format,
            other => other,
        };
        println!();
        println!("Preview:");
        println!("{}", render_preview(&text, format, &markup_config));
    }

    match report.status {
        Status::Success => ExitCode::SUCCESS,
        Status::Warning => ExitCode::from(1),
        Status::Error => ExitCode::from(2),
    }
}

fn paint(status: Status, message: &str, colorize: bool) -> String {
    if colorize {
        status.paint(message)
    } else {
        message.to_string()
    }
}
