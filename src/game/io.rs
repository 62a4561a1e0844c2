//! The narrow surface the game core uses to talk to a player.
//!
//! The core never prints or reads directly; it goes through [`Console`].
//! [`ScriptedConsole`] feeds canned input and records every line, which is how
//! sessions are driven in tests and how `play --script` can be replayed.

use std::collections::VecDeque;

use crate::game::errors::GameError;

pub trait Console {
    /// Emit one line of game text.
    fn display(&mut self, line: &str) -> Result<(), GameError>;

    /// Emit one row of the facility map. Terminals may render these faster.
    fn display_map_line(&mut self, line: &str) -> Result<(), GameError> {
        self.display(line)
    }

    /// Read one free-form line. Whitespace handling is left to the caller.
    fn request_line(&mut self, prompt: &str) -> Result<String, GameError>;

    /// Read until the trimmed, lower-cased input is one of `options`.
    fn request_choice(&mut self, options: &[&str]) -> Result<String, GameError> {
        loop {
            let raw = self.request_line("> ")?;
            let choice = raw.trim().to_lowercase();
            if options.contains(&choice.as_str()) {
                return Ok(choice);
            }
            self.display(&format!("Invalid choice. Options: {}", options.join(", ")))?;
        }
    }
}

/// In-memory console: pops queued input lines and keeps a transcript.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedConsole {
            input: lines.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    pub fn push_input(&mut self, line: &str) {
        self.input.push_back(line.to_string());
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// True if any emitted line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|l| l.contains(needle))
    }

    pub fn clear_transcript(&mut self) {
        self.transcript.clear();
    }
}

impl Console for ScriptedConsole {
    fn display(&mut self, line: &str) -> Result<(), GameError> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn request_line(&mut self, _prompt: &str) -> Result<String, GameError> {
        self.input.pop_front().ok_or(GameError::InputClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_choice_reprompts_until_valid() {
        let mut c = ScriptedConsole::new(["run", "  FLEE "]);
        let choice = c.request_choice(&["hide", "flee"]).unwrap();
        assert_eq!(choice, "flee");
        assert_eq!(c.transcript().len(), 1);
        assert_eq!(c.transcript()[0], "Invalid choice. Options: hide, flee");
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut c = ScriptedConsole::new(Vec::<String>::new());
        assert!(matches!(c.request_line("> "), Err(GameError::InputClosed)));
        assert!(matches!(
            c.request_choice(&["hide"]),
            Err(GameError::InputClosed)
        ));
    }

    #[test]
    fn map_lines_default_to_display() {
        let mut c = ScriptedConsole::default();
        c.display_map_line("[Ser:P]").unwrap();
        assert!(c.saw("[Ser:P]"));
    }
}
