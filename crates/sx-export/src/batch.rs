//! Chunked upsert statements
//!
//! MySQL refuses statements past `max_allowed_packet`, so dataset rows are
//! grouped into INSERTs of at most `capacity` tuples each.

use crate::error::ExportResult;
use crate::reporter::Reporter;
use crate::sink::StatementSink;
use sx_sql::TableSchema;

/// Totals reported when a [`BatchWriter`] is finished
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Row tuples written
    pub rows: usize,
    /// INSERT statements written
    pub statements: usize,
}

/// Buffers row tuples for one table and flushes them as upserts
#[derive(Debug)]
pub struct BatchWriter {
    header: String,
    trailer: String,
    capacity: usize,
    buffer: Vec<String>,
    stats: BatchStats,
}

impl BatchWriter {
    /// Writer for `table` flushing every `capacity` rows.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(table: &TableSchema, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            header: table.insert_header(),
            trailer: table.upsert_trailer(),
            capacity,
            buffer: Vec::with_capacity(capacity.min(4096)),
            stats: BatchStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rows waiting to be flushed.
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }

    /// Queue a row tuple; flushes once the buffer is full.
    pub fn add(
        &mut self,
        row: String,
        sink: &mut dyn StatementSink,
        reporter: &dyn Reporter,
    ) -> ExportResult<()> {
        self.buffer.push(row);
        if self.buffer.len() >= self.capacity {
            self.flush(sink, reporter)?;
        }
        Ok(())
    }

    /// Write pending rows as one statement. No-op when nothing is pending.
    pub fn flush(
        &mut self,
        sink: &mut dyn StatementSink,
        reporter: &dyn Reporter,
    ) -> ExportResult<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        reporter.info(&format!("Exporting {} datasets", self.buffer.len()));
        let sql = format!("{}{}{}\n", self.header, self.buffer.join(","), self.trailer);
        sink.write(&sql)?;
        self.stats.rows += self.buffer.len();
        self.stats.statements += 1;
        self.buffer.clear();
        Ok(())
    }

    /// Flush whatever is left and return the totals.
    pub fn finish(
        mut self,
        sink: &mut dyn StatementSink,
        reporter: &dyn Reporter,
    ) -> ExportResult<BatchStats> {
        self.flush(sink, reporter)?;
        Ok(self.stats)
    }
}

#[cfg(test)]
#[path = "batch_test.rs"]
mod tests;
