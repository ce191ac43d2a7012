//! Progress and warning notices emitted during a run.
//!
//! The converter never logs directly; it talks to a [`Reporter`] so tests
//! can capture exactly what a run would have logged.

use log::Level;
use std::cell::RefCell;

/// Receiver for conversion notices
pub trait Reporter {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Forwards notices to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Keeps every notice in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    entries: RefCell<Vec<(Level, String)>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notices, in emission order.
    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    /// Messages logged at `level`.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.messages(Level::Warn)
    }
}

impl Reporter for RecordingReporter {
    fn info(&self, message: &str) {
        self.entries
            .borrow_mut()
            .push((Level::Info, message.to_string()));
    }

    fn warn(&self, message: &str) {
        self.entries
            .borrow_mut()
            .push((Level::Warn, message.to_string()));
    }
}
