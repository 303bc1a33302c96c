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

use std::fmt::Display;
use std::fmt::Formatter;

/// The commands accepted at the main prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Command {
    /// Every command, in the order they are listed in the prompt.
    pub const ALL: [Command; 9] = [
        Command::Add,
        Command::Remove,
        Command::Import,
        Command::Export,
        Command::Ask,
        Command::Exit,
        Command::Log,
        Command::HardestCard,
        Command::ResetStats,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Remove => "remove",
            Command::Import => "import",
            Command::Export => "export",
            Command::Ask => "ask",
            Command::Exit => "exit",
            Command::Log => "log",
            Command::HardestCard => "hardest card",
            Command::ResetStats => "reset stats",
        }
    }

    /// Look up a command by its exact name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == s)
    }

    /// The text of the main prompt.
    pub fn prompt() -> String {
        let names: Vec<&str> = Self::ALL.iter().map(|c| c.name()).collect();
        format!("Input the action ({}):", names.join(", "))
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Command::parse("add"), Some(Command::Add));
        assert_eq!(Command::parse("hardest card"), Some(Command::HardestCard));
        assert_eq!(Command::parse("reset stats"), Some(Command::ResetStats));
        assert_eq!(Command::parse("Add"), None);
        assert_eq!(Command::parse("hardest"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_every_name_parses_back() {
        for command in Command::ALL {
            assert_eq!(Command::parse(&command.to_string()), Some(command));
        }
    }

    #[test]
    fn test_prompt() {
        assert_eq!(
            Command::prompt(),
            "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):"
        );
    }
}
