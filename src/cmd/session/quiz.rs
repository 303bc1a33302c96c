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
use flashcards_core::quiz::Verdict;
use flashcards_core::quiz::grade;

use crate::cmd::session::Session;
use crate::cmd::session::State;
use crate::console::Console;

impl<C: Console> Session<C> {
    /// Ask for the definitions of randomly chosen cards. Each question picks
    /// a card independently, so a card may come up more than once.
    pub(super) fn ask(&mut self) -> Fallible<State> {
        let Some(reply) = self.prompt("How many times to ask?")? else {
            return self.exit();
        };
        let Ok(times) = reply.trim().parse::<usize>() else {
            self.say("Please enter a non-negative number.")?;
            return Ok(State::Running);
        };
        for _ in 0..times {
            let Some(index) = self.rng.pick(self.store.len()) else {
                self.say("There are no cards to ask.")?;
                return Ok(State::Running);
            };
            let Some(term) = self.store.get(index).map(|c| c.term().to_string()) else {
                break;
            };
            let Some(answer) = self.prompt(&format!("Print the definition of \"{term}\":"))? else {
                return self.exit();
            };
            let message = match grade(&mut self.store, index, &answer) {
                Some(Verdict::Correct) => "Correct!".to_string(),
                Some(Verdict::WrongButMatches {
                    expected,
                    other_term,
                }) => format!(
                    "Wrong. The right answer is \"{expected}\", but your definition is correct for \"{other_term}\"."
                ),
                Some(Verdict::Wrong { expected }) => {
                    format!("Wrong. The right answer is \"{expected}\".")
                }
                None => break,
            };
            self.say(&message)?;
        }
        Ok(State::Running)
    }
}
