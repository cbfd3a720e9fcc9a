use std::io::{BufRead, Lines};

use crate::error::ConvertError;

/// Line-by-line input with one line of pushback.
///
/// Block handlers read ahead to decide whether the next line continues their
/// construct. When it does not, they call [`retry`](Self::retry) and the line
/// is delivered again by the next [`scan`](Self::scan), usually to the
/// caller's loop.
pub struct LineSource<R> {
    lines: Lines<R>,
    current: String,
    line_number: usize,
    pending: bool,
}

impl<R: BufRead> LineSource<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            current: String::new(),
            line_number: 0,
            pending: false,
        }
    }

    /// Advances to the next line.
    ///
    /// A line pushed back with [`retry`](Self::retry) is returned first
    /// without touching the reader. Returns `Ok(false)` at end of input.
    pub fn scan(&mut self) -> Result<bool, ConvertError> {
        if self.pending {
            self.pending = false;
            return Ok(true);
        }
        match self.lines.next() {
            Some(Ok(line)) => {
                self.line_number += 1;
                self.current = line;
                Ok(true)
            }
            Some(Err(source)) => Err(ConvertError::Read {
                line: self.line_number + 1,
                source,
            }),
            None => {
                self.current.clear();
                Ok(false)
            }
        }
    }

    /// The current line without its line terminator.
    pub fn text(&self) -> &str {
        &self.current
    }

    /// 1-based number of the current line (0 before the first scan).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Pushes the current line back so the next [`scan`](Self::scan)
    /// re-delivers it unchanged.
    ///
    /// Only one line can be pending; retrying twice without a scan in
    /// between is a bug in the caller.
    pub fn retry(&mut self) {
        debug_assert!(!self.pending, "line {} retried twice", self.line_number);
        self.pending = true;
    }
}
