//! Summary of a complete scan session.

use crate::backend::Backend;
use crate::parser::{Outcome, Parser};
use serde::Serialize;

/// One matched option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRecord {
    pub long: Option<String>,
    pub short: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Everything a scan produced: matches in order, the number of unmatched
/// tokens and the operands left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub matches: Vec<MatchRecord>,
    pub unmatched: usize,
    pub operands: Vec<String>,
}

impl Report {
    /// Drive `parser` until it is exhausted and record what it found.
    pub fn collect<B: Backend>(parser: &mut Parser<'_, B>) -> Report {
        let mut report = Report::default();

        loop {
            match parser.next() {
                Outcome::Matched(opt) => report.matches.push(MatchRecord {
                    long: opt.long_name().map(str::to_string),
                    short: opt.short_name(),
                    value: opt.value().map(str::to_string),
                }),
                Outcome::NoMatch => {}
                Outcome::End => break,
            }
        }

        report.unmatched = parser.unmatched_count();
        report.operands = parser.operands().iter().map(|s| s.to_string()).collect();
        report
    }

    /// Long (or short) names of the matched options, in match order.
    pub fn matched_names(&self) -> Vec<String> {
        self.matches
            .iter()
            .map(|m| match (&m.long, m.short) {
                (Some(long), _) => long.clone(),
                (None, Some(short)) => short.to_string(),
                (None, None) => String::new(),
            })
            .collect()
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
