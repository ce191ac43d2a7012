//! Output sinks for generated SQL.
//!
//! Sinks only ever append; a file sink truncates its target once, when it is
//! created, and appends from then on.

use crate::error::{ExportError, ExportResult};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use sx_sql::StatementValidator;

/// Destination for SQL text
pub trait StatementSink {
    /// Append `sql` to the output.
    fn write(&mut self, sql: &str) -> ExportResult<()>;

    /// Human-readable destination, used in messages.
    fn destination(&self) -> String;
}

impl<S: StatementSink + ?Sized> StatementSink for &mut S {
    fn write(&mut self, sql: &str) -> ExportResult<()> {
        (**self).write(sql)
    }

    fn destination(&self) -> String {
        (**self).destination()
    }
}

/// Prints each write to standard output, followed by a newline
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StatementSink for StdoutSink {
    fn write(&mut self, sql: &str) -> ExportResult<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{sql}")
            .and_then(|_| out.flush())
            .map_err(|e| ExportError::Write {
                destination: self.destination(),
                source: e,
            })
    }

    fn destination(&self) -> String {
        "stdout".to_string()
    }
}

/// Appends to a file
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    /// Truncate `path` (creating it if needed) and open it for appending.
    pub fn create(path: &Path) -> ExportResult<Self> {
        File::create(path).map_err(|e| write_error(path, e))?;
        Self::append(path)
    }

    /// Open `path` for appending, keeping existing content.
    pub fn append(path: &Path) -> ExportResult<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| write_error(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatementSink for FileSink {
    fn write(&mut self, sql: &str) -> ExportResult<()> {
        self.file
            .write_all(sql.as_bytes())
            .map_err(|e| write_error(&self.path, e))
    }

    fn destination(&self) -> String {
        self.path.display().to_string()
    }
}

fn write_error(path: &Path, source: io::Error) -> ExportError {
    ExportError::Write {
        destination: path.display().to_string(),
        source,
    }
}

/// Keeps every write in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    writes: Vec<String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Individual writes, in order.
    pub fn writes(&self) -> &[String] {
        &self.writes
    }

    /// Everything written, concatenated.
    pub fn contents(&self) -> String {
        self.writes.concat()
    }
}

impl StatementSink for MemorySink {
    fn write(&mut self, sql: &str) -> ExportResult<()> {
        self.writes.push(sql.to_string());
        Ok(())
    }

    fn destination(&self) -> String {
        "memory".to_string()
    }
}

/// Parses every write with the MySQL dialect before passing it on
#[derive(Debug)]
pub struct ValidatingSink<S> {
    inner: S,
    validator: StatementValidator,
}

impl<S: StatementSink> ValidatingSink<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            validator: StatementValidator::new(),
        }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: StatementSink> StatementSink for ValidatingSink<S> {
    fn write(&mut self, sql: &str) -> ExportResult<()> {
        let count = self.validator.validate(sql)?;
        log::debug!("Validated {count} statement(s) for {}", self.inner.destination());
        self.inner.write(sql)
    }

    fn destination(&self) -> String {
        self.inner.destination()
    }
}

#[cfg(test)]
#[path = "sink_test.rs"]
mod tests;
