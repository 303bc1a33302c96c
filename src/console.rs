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

//! Line-oriented user I/O.
//!
//! The session never touches stdin/stdout directly: it talks to a
//! [`Console`], wrapped in a [`Transcript`] that remembers every line that
//! went in either direction, so the `log` command can save it.

use std::io::BufRead;
use std::io::Stdin;
use std::io::Stdout;
use std::io::Write;

use flashcards_core::error::Fallible;

pub trait Console {
    /// Read one line of input without its line terminator. Returns `None`
    /// at end of input.
    fn read_line(&mut self) -> Fallible<Option<String>>;

    /// Write one line of output.
    fn write_line(&mut self, line: &str) -> Fallible<()>;
}

pub struct StdConsole {
    stdin: Stdin,
    stdout: Stdout,
}

impl StdConsole {
    pub fn new() -> Self {
        Self {
            stdin: std::io::stdin(),
            stdout: std::io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn read_line(&mut self) -> Fallible<Option<String>> {
        let mut line = String::new();
        if self.stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    fn write_line(&mut self, line: &str) -> Fallible<()> {
        let mut out = self.stdout.lock();
        writeln!(out, "{line}")?;
        out.flush()?;
        Ok(())
    }
}

/// A console that records everything passing through it.
pub struct Transcript<C: Console> {
    inner: C,
    buffer: String,
}

impl<C: Console> Transcript<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            buffer: String::new(),
        }
    }

    /// Everything read and written so far, one line per entry.
    pub fn contents(&self) -> &str {
        &self.buffer
    }

    #[cfg(test)]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    fn record(&mut self, line: &str) {
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }
}

impl<C: Console> Console for Transcript<C> {
    fn read_line(&mut self) -> Fallible<Option<String>> {
        let line = self.inner.read_line()?;
        if let Some(line) = &line {
            self.record(line);
        }
        Ok(line)
    }

    fn write_line(&mut self, line: &str) -> Fallible<()> {
        self.inner.write_line(line)?;
        self.record(line);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::ScriptedConsole;

    #[test]
    fn test_transcript_records_both_directions() -> Fallible<()> {
        let mut console = Transcript::new(ScriptedConsole::new(["add", "apple"]));
        console.write_line("Input the action:")?;
        assert_eq!(console.read_line()?, Some("add".to_string()));
        console.write_line("The card:")?;
        assert_eq!(console.read_line()?, Some("apple".to_string()));
        assert_eq!(console.read_line()?, None);
        assert_eq!(
            console.contents(),
            "Input the action:\nadd\nThe card:\napple\n"
        );
        assert_eq!(console.inner().output(), ["Input the action:", "The card:"]);
        Ok(())
    }

    #[test]
    fn test_transcript_starts_empty() {
        let console = Transcript::new(ScriptedConsole::new(Vec::<String>::new()));
        assert_eq!(console.contents(), "");
    }
}
