//! sx-export - Export driver for syntool-export
//!
//! This crate drives a conversion run: it loads metadata records in order,
//! emits the bootstrap DDL once, batches dataset rows into upsert statements
//! and writes everything through a [`StatementSink`].

pub mod batch;
pub mod converter;
pub mod error;
pub mod reporter;
pub mod sink;

pub use batch::{BatchStats, BatchWriter};
pub use converter::{convert_files, write_products_ddl, ConversionSummary, Converter};
pub use error::{ExportError, ExportResult};
pub use reporter::{LogReporter, RecordingReporter, Reporter};
pub use sink::{FileSink, MemorySink, StatementSink, StdoutSink, ValidatingSink};
