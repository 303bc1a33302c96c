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

use std::fs::read_to_string;
use std::fs::write;
use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use flashcards_core::error::Fallible;
use flashcards_core::record::format_records;
use flashcards_core::record::parse_records;

use crate::cmd::session::Session;
use crate::cmd::session::State;
use crate::console::Console;

const FILE_NOT_FOUND: &str = "File not found.";

impl<C: Console> Session<C> {
    pub(super) fn import(&mut self) -> Fallible<State> {
        let Some(path) = self.prompt_path()? else {
            return self.exit();
        };
        self.import_from(&path)?;
        Ok(State::Running)
    }

    /// Load every record in the file. Existing cards with the same term are
    /// replaced. A malformed line aborts the import before any card is
    /// loaded.
    pub(super) fn import_from(&mut self, path: &Path) -> Fallible<()> {
        let text = match read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                log::warn!("{} is not valid UTF-8: {e}", path.display());
                return self.say(
                    "Malformed record: file is not valid UTF-8. No cards have been loaded.",
                );
            }
            Err(e) => {
                log::warn!("Failed to read {}: {e}", path.display());
                return self.say(FILE_NOT_FOUND);
            }
        };
        let cards = match parse_records(&text) {
            Ok(cards) => cards,
            Err(e) => {
                return self.say(&format!(
                    "Malformed record: {e}. No cards have been loaded."
                ));
            }
        };
        let count = cards.len();
        let mut replaced = 0;
        for card in cards {
            if self.store.insert_or_replace(card) {
                replaced += 1;
            }
        }
        log::debug!(
            "Imported {count} cards from {} ({replaced} replaced)",
            path.display()
        );
        self.say(&format!("{count} cards have been loaded."))
    }

    pub(super) fn export(&mut self) -> Fallible<State> {
        let Some(path) = self.prompt_path()? else {
            return self.exit();
        };
        self.export_to_path(&path)?;
        Ok(State::Running)
    }

    /// Write every card, in store order, overwriting the file.
    pub(super) fn export_to_path(&mut self, path: &Path) -> Fallible<()> {
        let count = self.store.len();
        if let Err(e) = write(path, format_records(self.store.cards())) {
            log::warn!("Failed to write {}: {e}", path.display());
            return self.say(FILE_NOT_FOUND);
        }
        log::debug!("Exported {count} cards to {}", path.display());
        self.say(&format!("{count} cards have been saved."))
    }

    /// Save the transcript of the session so far.
    pub(super) fn log(&mut self) -> Fallible<State> {
        let Some(path) = self.prompt_path()? else {
            return self.exit();
        };
        if let Err(e) = write(&path, self.console.contents()) {
            log::warn!("Failed to write {}: {e}", path.display());
            self.say(FILE_NOT_FOUND)?;
            return Ok(State::Running);
        }
        self.say("The log has been saved.")?;
        Ok(State::Running)
    }

    fn prompt_path(&mut self) -> Fallible<Option<PathBuf>> {
        Ok(self.prompt("File name:")?.map(PathBuf::from))
    }
}

#[cfg(test)]
mod tests {
    use std::fs::read_to_string;
    use std::fs::write;

    use flashcards_core::rng::TinyRng;
    use flashcards_core::types::card::Card;

    use super::*;
    use crate::helper::ScriptedConsole;
    use crate::helper::create_tmp_directory;

    fn run_script(lines: &[&str]) -> Fallible<Session<ScriptedConsole>> {
        let console = ScriptedConsole::new(lines.iter().copied());
        let mut session = Session::new(console, TinyRng::from_seed(0), None);
        session.run()?;
        Ok(session)
    }

    fn replies(session: &Session<ScriptedConsole>) -> Vec<&str> {
        session
            .console
            .inner()
            .output()
            .iter()
            .map(String::as_str)
            .filter(|line| !line.starts_with("Input the action"))
            .collect()
    }

    #[test]
    fn test_import_missing_file() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.path().join("nope.txt").display().to_string();
        let session = run_script(&["import", &path, "exit"])?;
        assert!(session.store.is_empty());
        assert_eq!(
            replies(&session),
            vec!["File name:", "File not found.", "Bye bye!"]
        );
        Ok(())
    }

    #[test]
    fn test_import_replaces_by_term() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.path().join("cards.txt");
        write(&path, "apple,a pome,5")?;
        let path = path.display().to_string();
        let session = run_script(&[
            "add", "apple", "a fruit", "add", "carrot", "a vegetable", "import", &path, "exit",
        ])?;
        assert_eq!(
            session.store.cards(),
            &[
                Card::with_errors("apple", "a pome", 5),
                Card::new("carrot", "a vegetable"),
            ]
        );
        assert!(replies(&session).contains(&"1 cards have been loaded."));
        Ok(())
    }

    #[test]
    fn test_import_malformed_file_loads_nothing() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.path().join("cards.txt");
        write(&path, "apple,a fruit,3\nbanana,a fruit,lots\n")?;
        let path = path.display().to_string();
        let session = run_script(&["import", &path, "exit"])?;
        assert!(session.store.is_empty());
        assert_eq!(
            replies(&session)[1],
            "Malformed record: invalid error count \"lots\" (line 2). No cards have been loaded."
        );
        Ok(())
    }

    #[test]
    fn test_import_invalid_utf8() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.path().join("cards.txt");
        write(&path, b"apple,a fruit,0\n\xff\xfe,oops,1\n")?;
        let path = path.display().to_string();
        let session = run_script(&["import", &path, "exit"])?;
        assert!(session.store.is_empty());
        assert_eq!(
            replies(&session)[1],
            "Malformed record: file is not valid UTF-8. No cards have been loaded."
        );
        Ok(())
    }

    #[test]
    fn test_export_overwrites() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.path().join("cards.txt");
        write(&path, "old contents\nmore old contents\n")?;
        let path_str = path.display().to_string();
        let session = run_script(&["add", "x", "1", "export", &path_str, "exit"])?;
        assert_eq!(read_to_string(&path)?, "x,1,0\n");
        assert!(replies(&session).contains(&"1 cards have been saved."));
        Ok(())
    }

    #[test]
    fn test_export_empty_store() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.path().join("cards.txt");
        let path_str = path.display().to_string();
        let session = run_script(&["export", &path_str, "exit"])?;
        assert_eq!(read_to_string(&path)?, "");
        assert!(replies(&session).contains(&"0 cards have been saved."));
        Ok(())
    }

    #[test]
    fn test_export_to_missing_directory() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.path().join("no").join("such").join("dir.txt");
        let path = path.display().to_string();
        let session = run_script(&["add", "x", "1", "export", &path, "exit"])?;
        assert_eq!(
            &replies(&session)[3..],
            &["File name:", "File not found.", "Bye bye!"]
        );
        assert_eq!(session.store.len(), 1);
        Ok(())
    }

    #[test]
    fn test_log() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.path().join("session.log");
        let path_str = path.display().to_string();
        let session = run_script(&["remove", "grape", "log", &path_str, "exit"])?;
        let prompt = "Input the action (add, remove, import, export, ask, exit, log, hardest card, reset stats):";
        let expected = format!(
            "{prompt}\nremove\nWhich card?\ngrape\nCan't remove \"grape\": there is no such card.\n{prompt}\nlog\nFile name:\n{path_str}\n"
        );
        assert_eq!(read_to_string(&path)?, expected);
        assert!(replies(&session).contains(&"The log has been saved."));
        Ok(())
    }

    #[test]
    fn test_log_to_missing_directory() -> Fallible<()> {
        let dir = create_tmp_directory()?;
        let path = dir.path().join("no").join("session.log");
        let path = path.display().to_string();
        let session = run_script(&["log", &path, "exit"])?;
        assert_eq!(
            replies(&session),
            vec!["File name:", "File not found.", "Bye bye!"]
        );
        Ok(())
    }
}
