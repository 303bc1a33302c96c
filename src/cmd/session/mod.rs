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

mod cards;
mod command;
mod files;
mod quiz;

use std::path::PathBuf;

use flashcards_core::error::Fallible;
use flashcards_core::rng::TinyRng;
use flashcards_core::store::CardStore;

use crate::cmd::session::command::Command;
use crate::console::Console;
use crate::console::Transcript;

pub struct SessionConfig {
    /// Cards to import before the first prompt.
    pub import_from: Option<PathBuf>,
    /// Where to export the cards when the session ends.
    pub export_to: Option<PathBuf>,
}

/// Whether the command loop keeps going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Running,
    Exiting,
}

/// An interactive study session: owns the cards and drives the command
/// loop over a console.
pub struct Session<C: Console> {
    console: Transcript<C>,
    store: CardStore,
    rng: TinyRng,
    export_to: Option<PathBuf>,
}

/// Run a session to completion.
pub fn start_session<C: Console>(config: SessionConfig, console: C, rng: TinyRng) -> Fallible<()> {
    let mut session = Session::new(console, rng, config.export_to);
    if let Some(path) = config.import_from {
        log::debug!("Importing cards from {} at startup", path.display());
        session.import_from(&path)?;
    }
    session.run()
}

impl<C: Console> Session<C> {
    pub fn new(console: C, rng: TinyRng, export_to: Option<PathBuf>) -> Self {
        Self {
            console: Transcript::new(console),
            store: CardStore::new(),
            rng,
            export_to,
        }
    }

    /// Read and execute commands until `exit` or end of input.
    pub fn run(&mut self) -> Fallible<()> {
        let prompt = Command::prompt();
        let mut state = State::Running;
        while state == State::Running {
            state = match self.prompt(&prompt)? {
                Some(line) => match Command::parse(&line) {
                    Some(command) => self.dispatch(command)?,
                    None => {
                        log::debug!("Ignoring unknown command {line:?}");
                        State::Running
                    }
                },
                None => self.exit()?,
            };
        }
        Ok(())
    }

    fn dispatch(&mut self, command: Command) -> Fallible<State> {
        log::debug!("Running command {command}");
        match command {
            Command::Add => self.add(),
            Command::Remove => self.remove(),
            Command::Import => self.import(),
            Command::Export => self.export(),
            Command::Ask => self.ask(),
            Command::Exit => self.exit(),
            Command::Log => self.log(),
            Command::HardestCard => self.hardest_card(),
            Command::ResetStats => self.reset_stats(),
        }
    }

    fn exit(&mut self) -> Fallible<State> {
        if let Some(path) = self.export_to.clone() {
            self.export_to_path(&path)?;
        }
        self.say("Bye bye!")?;
        Ok(State::Exiting)
    }

    fn say(&mut self, line: &str) -> Fallible<()> {
        self.console.write_line(line)
    }

    /// Print `message`, then read the user's reply.
    fn prompt(&mut self, message: &str) -> Fallible<Option<String>> {
        self.say(message)?;
        self.console.read_line()
    }
}
