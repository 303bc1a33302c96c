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

use crate::store::CardStore;
use crate::types::card::Card;

/// The outcome of answering a quiz question.
#[derive(Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The answer is the card's definition.
    Correct,
    /// The answer is wrong, but it is the definition of another card.
    WrongButMatches { expected: String, other_term: String },
    /// The answer matches no definition in the store.
    Wrong { expected: String },
}

/// Grade `answer` against the card at `index`. A wrong answer is counted
/// against the asked card, never against the card whose definition the
/// answer happens to match.
///
/// Returns `None` if there is no card at `index`.
pub fn grade(store: &mut CardStore, index: usize, answer: &str) -> Option<Verdict> {
    let card = store.get(index)?;
    if card.definition() == answer {
        return Some(Verdict::Correct);
    }
    let expected = card.definition().to_string();
    let verdict = match store.find_by_definition(answer) {
        Some(other) => Verdict::WrongButMatches {
            expected,
            other_term: store.get(other)?.term().to_string(),
        },
        None => Verdict::Wrong { expected },
    };
    store.add_error(index);
    Some(verdict)
}

/// The cards the user struggles with the most.
#[derive(Debug, PartialEq, Eq)]
pub enum Hardest<'a> {
    /// The store is empty, or no card has any errors.
    NoErrors,
    /// Exactly one card has the highest error count.
    One(&'a Card),
    /// Several cards share the highest error count.
    Many { cards: Vec<&'a Card>, errors: u64 },
}

pub fn hardest(store: &CardStore) -> Hardest<'_> {
    let errors = store.max_error();
    if errors == 0 {
        return Hardest::NoErrors;
    }
    let mut cards = store.cards_with_error(errors);
    if cards.len() == 1 {
        if let Some(card) = cards.pop() {
            return Hardest::One(card);
        }
    }
    Hardest::Many { cards, errors }
}
