//! Progress and summary messages for a vocabulary run.
//!
//! Messages go to a log file or stderr, never to the vocabulary output, and
//! are gated on the verbosity level: 0 prints only the header and the final
//! size, 1 adds truncation decisions, 2 adds progress counters.

use chrono::Local;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, VocabError};

pub struct Diagnostics {
    verbose: i32,
    sink: Box<dyn Write>,
}

impl Diagnostics {
    pub fn new(verbose: i32, sink: Box<dyn Write>) -> Self {
        Diagnostics { verbose, sink }
    }

    pub fn stderr(verbose: i32) -> Self {
        Self::new(verbose, Box::new(io::stderr()))
    }

    /// Open (truncating) a log file. Failure here is fatal to the run.
    pub fn log_file(verbose: i32, path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| VocabError::unavailable("log file", path, e))?;
        Ok(Self::new(verbose, Box::new(BufWriter::new(file))))
    }

    pub fn verbose(&self) -> i32 {
        self.verbose
    }

    /// Unconditional message line.
    pub fn say(&mut self, msg: &str) -> io::Result<()> {
        writeln!(self.sink, "{msg}")
    }

    /// Message line printed only when verbosity exceeds `level`.
    pub fn above(&mut self, level: i32, msg: &str) -> io::Result<()> {
        if self.verbose > level {
            self.say(msg)?;
        }
        Ok(())
    }

    pub fn header(&mut self, title: &str) -> io::Result<()> {
        let time_str = Local::now().format("%x - %I:%M.%S%p");
        writeln!(self.sink, "{time_str}, {title}")
    }

    /// In-place token counter; only at verbosity 2.
    pub fn progress(&mut self, tokens: u64) -> io::Result<()> {
        if self.verbose > 1 {
            write!(self.sink, "\x1B[11G{tokens} tokens.")?; // ANSI escape to move cursor
            self.sink.flush()?;
        }
        Ok(())
    }

    pub fn start_progress(&mut self) -> io::Result<()> {
        if self.verbose > 1 {
            write!(self.sink, "Processed 0 tokens.")?;
            self.sink.flush()?;
        }
        Ok(())
    }

    pub fn finish_progress(&mut self, tokens: u64) -> io::Result<()> {
        if self.verbose > 1 {
            writeln!(self.sink, "\x1B[0GProcessed {tokens} tokens.")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
