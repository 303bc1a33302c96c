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

use flashcards_core::error::Fallible;
use flashcards_core::quiz::Hardest;
use flashcards_core::quiz::hardest;
use flashcards_core::types::card::Card;

use crate::cmd::session::Session;
use crate::cmd::session::State;
use crate::console::Console;

impl<C: Console> Session<C> {
    /// Prompt for a new term and definition, insisting on both being
    /// non-empty and unique.
    pub(super) fn add(&mut self) -> Fallible<State> {
        let Some(mut term) = self.prompt("The card:")? else {
            return self.exit();
        };
        while let Some(message) = self.reject_term(&term) {
            let Some(next) = self.prompt(&message)? else {
                return self.exit();
            };
            term = next;
        }
        let Some(mut definition) = self.prompt(&format!("The definition of {term}:"))? else {
            return self.exit();
        };
        while let Some(message) = self.reject_definition(&definition) {
            let Some(next) = self.prompt(&message)? else {
                return self.exit();
            };
            definition = next;
        }
        let confirmation = format!("The pair (\"{term}\":\"{definition}\") has been added");
        self.store.add(Card::new(term, definition))?;
        self.say(&confirmation)?;
        Ok(State::Running)
    }

    fn reject_term(&self, term: &str) -> Option<String> {
        if term.is_empty() {
            Some("The term can't be empty. Try again:".to_string())
        } else if self.store.find_by_term(term).is_some() {
            Some(format!("The term \"{term}\" already exists. Try again:"))
        } else {
            None
        }
    }

    fn reject_definition(&self, definition: &str) -> Option<String> {
        if definition.is_empty() {
            Some("The definition can't be empty. Try again:".to_string())
        } else if self.store.find_by_definition(definition).is_some() {
            Some(format!(
                "The definition \"{definition}\" already exists. Try again:"
            ))
        } else {
            None
        }
    }

    pub(super) fn remove(&mut self) -> Fallible<State> {
        let Some(term) = self.prompt("Which card?")? else {
            return self.exit();
        };
        match self.store.remove_by_term(&term) {
            Ok(_) => self.say("The card has been removed.")?,
            Err(_) => self.say(&format!("Can't remove \"{term}\": there is no such card."))?,
        }
        Ok(State::Running)
    }

    pub(super) fn hardest_card(&mut self) -> Fallible<State> {
        let message = match hardest(&self.store) {
            Hardest::NoErrors => "There are no cards with errors.".to_string(),
            Hardest::One(card) => format!(
                "The hardest card is \"{}\". You have {} errors answering it",
                card.term(),
                card.errors()
            ),
            Hardest::Many { cards, errors } => {
                let terms: Vec<&str> = cards.into_iter().map(Card::term).collect();
                format!(
                    "The hardest cards are {}. You have {errors} errors answering them",
                    terms.join(", ")
                )
            }
        };
        self.say(&message)?;
        Ok(State::Running)
    }

    /// Forget every card, not just the error counts.
    pub(super) fn reset_stats(&mut self) -> Fallible<State> {
        log::debug!("Clearing {} cards", self.store.len());
        self.store.clear();
        self.say("Card statistics have been reset.")?;
        Ok(State::Running)
    }
}
