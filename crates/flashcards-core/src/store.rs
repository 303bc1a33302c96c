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

use std::error::Error;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::card::Card;

/// The ordered collection of cards in a session.
///
/// Insertion order is preserved and is the order cards are exported in.
/// Terms and definitions are unique when cards go through [`CardStore::add`];
/// [`CardStore::insert_or_replace`] only keys on the term, since imported
/// records are trusted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardStore {
    cards: Vec<Card>,
}

/// Errors raised by store mutations.
#[derive(Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A card with this term is already in the store.
    DuplicateTerm(String),
    /// A card with this definition is already in the store.
    DuplicateDefinition(String),
    /// No card has this term.
    NoSuchCard(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::DuplicateTerm(term) => {
                write!(f, "the term \"{term}\" already exists.")
            }
            StoreError::DuplicateDefinition(definition) => {
                write!(f, "the definition \"{definition}\" already exists.")
            }
            StoreError::NoSuchCard(term) => {
                write!(f, "there is no card with the term \"{term}\".")
            }
        }
    }
}

impl Error for StoreError {}

impl CardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub fn find_by_term(&self, term: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.term() == term)
    }

    pub fn find_by_definition(&self, definition: &str) -> Option<usize> {
        self.cards.iter().position(|c| c.definition() == definition)
    }

    /// Append a card, rejecting it if its term or definition is taken.
    pub fn add(&mut self, card: Card) -> Result<(), StoreError> {
        if self.find_by_term(card.term()).is_some() {
            return Err(StoreError::DuplicateTerm(card.term().to_string()));
        }
        if self.find_by_definition(card.definition()).is_some() {
            return Err(StoreError::DuplicateDefinition(
                card.definition().to_string(),
            ));
        }
        self.cards.push(card);
        Ok(())
    }

    /// Replace the card with the same term in place, or append the card if
    /// the term is new. Returns `true` if an existing card was replaced.
    pub fn insert_or_replace(&mut self, card: Card) -> bool {
        match self.find_by_term(card.term()) {
            Some(index) => {
                log::debug!("Replacing card {:?} at position {index}", card.term());
                self.cards[index] = card;
                true
            }
            None => {
                self.cards.push(card);
                false
            }
        }
    }

    pub fn remove_by_term(&mut self, term: &str) -> Result<Card, StoreError> {
        match self.find_by_term(term) {
            Some(index) => Ok(self.cards.remove(index)),
            None => Err(StoreError::NoSuchCard(term.to_string())),
        }
    }

    /// Record a wrong answer for the card at `index`. Returns the card's new
    /// error count, or `None` if the index is out of range.
    pub fn add_error(&mut self, index: usize) -> Option<u64> {
        let card = self.cards.get_mut(index)?;
        card.add_error();
        Some(card.errors())
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// The highest error count in the store, or zero if it is empty.
    pub fn max_error(&self) -> u64 {
        self.cards.iter().map(Card::errors).max().unwrap_or(0)
    }

    /// All cards with exactly `errors` errors, in store order.
    pub fn cards_with_error(&self, errors: u64) -> Vec<&Card> {
        self.cards.iter().filter(|c| c.errors() == errors).collect()
    }
}
