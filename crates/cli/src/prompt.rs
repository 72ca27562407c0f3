//! Line input sources for the menu loop.
//!
//! The loop reads through the [`LineSource`] trait so tests can drive it
//! with a scripted transcript instead of a live terminal.

use std::io::{stdin, stdout, Write};

use etf_research_core::error::Result;

/// A source of user-typed lines.
pub trait LineSource {
    /// Shows `prompt` and reads one line, without its trailing newline.
    /// Returns `None` when the source has no more input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads lines from standard input.
#[derive(Default)]
pub struct StdinLineSource;

impl LineSource for StdinLineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        stdout().flush()?;

        let mut input = String::new();
        let bytes_read = stdin().read_line(&mut input)?;
        if bytes_read == 0 {
            return Ok(None);
        }

        Ok(Some(input.trim_end_matches(['\n', '\r']).to_string()))
    }
}

/// Replays a fixed transcript of lines, then reports end of input.
pub struct ScriptedLineSource {
    lines: std::vec::IntoIter<String>,
}

impl ScriptedLineSource {
    #[must_use]
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl LineSource for ScriptedLineSource {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.next())
    }
}
