// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The record format used by import and export.
//!
//! One card per line, three comma-separated fields:
//!
//! ```text
//! <term>,<definition>,<errors>
//! ```
//!
//! Fields are not escaped, so a term or definition containing a comma
//! cannot be read back.

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::card::Card;

const SEPARATOR: char = ',';

#[derive(Debug, PartialEq, Eq)]
pub struct RecordError {
    pub message: String,
    /// Zero-based index of the offending line.
    pub line_num: usize,
}

impl RecordError {
    fn new(message: impl Into<String>, line_num: usize) -> Self {
        RecordError {
            message: message.into(),
            line_num,
        }
    }
}

impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (line {})", self.message, self.line_num + 1)
    }
}

impl Error for RecordError {}

/// Parse a single record line.
pub fn parse_record(line: &str, line_num: usize) -> Result<Card, RecordError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(SEPARATOR).collect();
    let [term, definition, errors] = fields.as_slice() else {
        return Err(RecordError::new(
            format!("expected 3 fields, found {}", fields.len()),
            line_num,
        ));
    };
    if term.is_empty() {
        return Err(RecordError::new("empty term", line_num));
    }
    if definition.is_empty() {
        return Err(RecordError::new("empty definition", line_num));
    }
    let errors: u64 = errors
        .parse()
        .map_err(|_| RecordError::new(format!("invalid error count {errors:?}"), line_num))?;
    Ok(Card::with_errors(*term, *definition, errors))
}

/// Parse the contents of a record file. Fails on the first malformed line,
/// so callers either get every card or none.
pub fn parse_records(text: &str) -> Result<Vec<Card>, RecordError> {
    text.lines()
        .enumerate()
        .map(|(line_num, line)| parse_record(line, line_num))
        .collect()
}

/// Render a card as a record line, including the trailing newline.
pub fn format_record(card: &Card) -> String {
    format!(
        "{}{SEPARATOR}{}{SEPARATOR}{}\n",
        card.term(),
        card.definition(),
        card.errors()
    )
}

pub fn format_records<'a>(cards: impl IntoIterator<Item = &'a Card>) -> String {
    cards.into_iter().map(format_record).collect()
}
