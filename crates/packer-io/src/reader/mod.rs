//! Reads packing tasks from text, one task per line.
//!
//! ```text
//! line  := capacity ws* ':' ws* item (ws+ item)*
//! item  := '(' index ',' number ',' '€' number ')'
//! index := digits
//! number := digits | digits? '.' digits
//! ```
//!
//! Blank lines are skipped. Any other deviation is reported as
//! [`PackerError::IncorrectInput`] with the 1-based line number.
//!
//! # Example
//!
//! ```
//! use packer_io::TaskReader;
//!
//! let input = "81 : (1,53.38,€45) (2,88.62,€98)\n8 : (1,15.3,€34)\n";
//! let tasks = TaskReader::new(input.as_bytes()).read_all().unwrap();
//!
//! assert_eq!(tasks.len(), 2);
//! assert_eq!(tasks[1].capacity(), 8.0);
//! ```

mod line;


use std::fs::File;
use std::io::{self, BufRead, BufReader, Lines};
use std::path::Path;

use packer_core::{PackerError, Result, Task};
use tracing::debug;

pub use line::parse_task;

/// Streams tasks out of a buffered reader.
#[derive(Debug)]
pub struct TaskReader<R> {
    lines: Lines<R>,
    line_number: usize,
}

impl TaskReader<BufReader<File>> {
    /// Opens a task file.
    ///
    /// # Errors
    ///
    /// Returns [`PackerError::FileNotFound`] if the file does not exist and
    /// [`PackerError::Io`] for any other failure to open it.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => PackerError::FileNotFound {
                path: path.to_path_buf(),
                source,
            },
            _ => PackerError::Io(source),
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TaskReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// Reads the next task, or `None` once the input is exhausted.
    pub fn read_next(&mut self) -> Option<Result<Task>> {
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let text = match line {
                Ok(text) => text,
                Err(err) => return Some(Err(err.into())),
            };
            if text.trim().is_empty() {
                continue;
            }
            return Some(line::parse_line(&text, self.line_number));
        }
        None
    }

    /// Reads every remaining task, failing on the first malformed line.
    pub fn read_all(&mut self) -> Result<Vec<Task>> {
        let tasks = self.by_ref().collect::<Result<Vec<_>>>()?;
        debug!(event = "tasks_read", task_count = tasks.len(), lines = self.line_number);
        Ok(tasks)
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for TaskReader<R> {
    type Item = Result<Task>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_next()
    }
}
