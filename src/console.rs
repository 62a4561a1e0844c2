//! Terminal implementation of [`Console`] with optional suspense printing.
//!
//! Slow printing writes one character at a time with a short sleep between
//! them and pauses after each line. It only makes sense on a real terminal,
//! so [`TerminalConsole::stdio`] turns it off when stdout is redirected.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::config::DisplayConfig;
use crate::game::{Console, GameError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pacing {
    pub char_delay: Duration,
    pub map_char_delay: Duration,
    pub line_pause: Duration,
}

impl Pacing {
    pub fn instant() -> Self {
        Pacing::default()
    }

    pub fn from_config(cfg: &DisplayConfig) -> Self {
        if !cfg.slow_print {
            return Pacing::instant();
        }
        Pacing {
            char_delay: Duration::from_millis(cfg.char_delay_ms),
            map_char_delay: Duration::from_millis(cfg.map_char_delay_ms),
            line_pause: Duration::from_millis(cfg.line_pause_ms),
        }
    }
}

pub struct TerminalConsole<I: BufRead, O: Write> {
    input: I,
    output: O,
    pacing: Pacing,
    /// Echo input lines back, used when actions come from a script file.
    echo_input: bool,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process stdin/stdout. Pacing is dropped when stdout
    /// is not a terminal.
    pub fn stdio(pacing: Pacing) -> Self {
        let pacing = if atty::is(atty::Stream::Stdout) {
            pacing
        } else {
            Pacing::instant()
        };
        TerminalConsole::new(io::stdin().lock(), io::stdout(), pacing)
    }
}

impl<I: BufRead, O: Write> TerminalConsole<I, O> {
    pub fn new(input: I, output: O, pacing: Pacing) -> Self {
        TerminalConsole {
            input,
            output,
            pacing,
            echo_input: false,
        }
    }

    pub fn echo_input(mut self, echo: bool) -> Self {
        self.echo_input = echo;
        self
    }

    pub fn into_output(self) -> O {
        self.output
    }

    fn write_paced(&mut self, line: &str, char_delay: Duration) -> Result<(), GameError> {
        if char_delay.is_zero() {
            writeln!(self.output, "{}", line)?;
        } else {
            let mut buf = [0u8; 4];
            for ch in line.chars() {
                self.output.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
                self.output.flush()?;
                thread::sleep(char_delay);
            }
            writeln!(self.output)?;
        }
        self.output.flush()?;
        if !self.pacing.line_pause.is_zero() {
            thread::sleep(self.pacing.line_pause);
        }
        Ok(())
    }
}

impl<I: BufRead, O: Write> Console for TerminalConsole<I, O> {
    fn display(&mut self, line: &str) -> Result<(), GameError> {
        let delay = self.pacing.char_delay;
        self.write_paced(line, delay)
    }

    fn display_map_line(&mut self, line: &str) -> Result<(), GameError> {
        let delay = self.pacing.map_char_delay;
        self.write_paced(line, delay)
    }

    fn request_line(&mut self, prompt: &str) -> Result<String, GameError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(GameError::InputClosed);
        }
        let line = line.trim_end_matches(['\r', '\n']).to_string();
        if self.echo_input {
            writeln!(self.output, "{}", line)?;
        }
        Ok(line)
    }
}
