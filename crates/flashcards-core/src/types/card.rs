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

/// A single term/definition pair, together with the number of times the
/// user has answered it wrong.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    term: String,
    definition: String,
    errors: u64,
}

impl Card {
    /// A fresh card with no recorded errors.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::with_errors(term, definition, 0)
    }

    /// A card with a known error count, e.g. when loaded from a record.
    pub fn with_errors(
        term: impl Into<String>,
        definition: impl Into<String>,
        errors: u64,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            errors,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn errors(&self) -> u64 {
        self.errors
    }

    pub fn add_error(&mut self) {
        self.errors = self.errors.saturating_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_has_no_errors() {
        let card = Card::new("apple", "a fruit");
        assert_eq!(card.term(), "apple");
        assert_eq!(card.definition(), "a fruit");
        assert_eq!(card.errors(), 0);
    }

    #[test]
    fn test_add_error() {
        let mut card = Card::with_errors("apple", "a fruit", 2);
        card.add_error();
        assert_eq!(card.errors(), 3);
    }

    #[test]
    fn test_add_error_saturates() {
        let mut card = Card::with_errors("apple", "a fruit", u64::MAX);
        card.add_error();
        assert_eq!(card.errors(), u64::MAX);
    }
}
