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

use crate::tester::MatchReport;

/// Substitutes `$N` capture group references in a notification template.
///
/// - `$N` (one or more digits) becomes the text of group `N`; a group that did not
///   participate becomes nothing.
/// - A reference past the last group is kept literally.
/// - `\$` produces a literal `$`.
///
/// # Examples
///
/// ```
/// use chatregex_tester::{MatchReport, expand_template};
///
/// let report = MatchReport::new(vec![Some("Alex joined".into()), Some("Alex".into())]);
/// assert_eq!(expand_template("Welcome $1! \\$5 bonus $7", &report), "Welcome Alex! $5 bonus $7");
/// ```
pub fn expand_template(template: &str, report: &MatchReport) -> String {
    let chars: Vec<char> = template.chars().collect();
    let mut result = String::with_capacity(template.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch == '\\' && chars.get(i + 1) == Some(&'$') {
            result.push('$');
            i += 2;
        } else if ch == '$' && chars.get(i + 1).is_some_and(char::is_ascii_digit) {
            let start = i + 1;
            let mut end = start;
            while end < chars.len() && chars[end].is_ascii_digit() {
                end += 1;
            }
            let digits: String = chars[start..end].iter().collect();
            match digits.parse::<usize>() {
                Ok(index) if index < report.len() => {
                    if let Some(group) = report.group(index) {
                        result.push_str(group);
                    }
                }
                _ => {
                    result.push('$');
                    result.push_str(&digits);
                }
            }
            i = end;
        } else {
            result.push(ch);
            i += 1;
        }
    }

    result
}
