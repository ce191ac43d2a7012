//! Conversion driver
//!
//! A run starts in the init state. The first record decides the product
//! identifier and type; the bootstrap DDL/DML is written unbatched, then
//! every record (including the first) is turned into one or two rows and
//! handed to the [`BatchWriter`].

use crate::batch::BatchWriter;
use crate::error::ExportResult;
use crate::reporter::Reporter;
use crate::sink::{StatementSink, ValidatingSink};
use std::path::Path;
use sx_core::{ConvertOptions, CoreError, MetadataRecord, ProductId, DEFAULT_PRODUCT_TYPE};
use sx_sql::{dataset_table, product_upsert, products_table_ddl, row_tuple, DatasetRow, TableSchema};

/// Totals for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Metadata records consumed
    pub records: usize,
    /// Records split in two because they cross the antimeridian
    pub xidl_splits: usize,
    /// Dataset row tuples written
    pub rows: usize,
    /// Dataset INSERT statements written
    pub statements: usize,
}

/// State after the first record has been seen
struct Streaming {
    table: TableSchema,
    batch: BatchWriter,
}

/// Turns metadata records into SQL, one record at a time
pub struct Converter<'a> {
    options: ConvertOptions,
    sink: Box<dyn StatementSink + 'a>,
    reporter: &'a dyn Reporter,
    streaming: Option<Streaming>,
    records: usize,
    xidl_splits: usize,
}

impl<'a> Converter<'a> {
    /// Create a converter writing to `sink`.
    ///
    /// When `options.validate_sql` is set, every write is parsed first.
    pub fn new(
        options: ConvertOptions,
        sink: &'a mut dyn StatementSink,
        reporter: &'a dyn Reporter,
    ) -> ExportResult<Self> {
        options.validate()?;
        let sink: Box<dyn StatementSink + 'a> = if options.validate_sql {
            Box::new(ValidatingSink::new(sink))
        } else {
            Box::new(sink)
        };
        Ok(Self {
            options,
            sink,
            reporter,
            streaming: None,
            records: 0,
            xidl_splits: 0,
        })
    }

    /// Load the record at `path` and convert it.
    pub fn push_file(&mut self, path: &Path) -> ExportResult<()> {
        log::debug!("Loading {}", path.display());
        let record = MetadataRecord::load(path)?;
        self.push_record(record)
    }

    /// Convert one record.
    pub fn push_record(&mut self, record: MetadataRecord) -> ExportResult<()> {
        let mut state = match self.streaming.take() {
            Some(state) => state,
            None => Self::bootstrap(&self.options, self.sink.as_mut(), &record)?,
        };
        let result = self.emit_rows(&mut state, record);
        self.streaming = Some(state);
        result?;
        self.records += 1;
        Ok(())
    }

    /// Flush pending rows and report totals.
    pub fn finish(mut self) -> ExportResult<ConversionSummary> {
        let mut summary = ConversionSummary {
            records: self.records,
            xidl_splits: self.xidl_splits,
            ..Default::default()
        };
        if let Some(state) = self.streaming.take() {
            let stats = state.batch.finish(self.sink.as_mut(), self.reporter)?;
            summary.rows = stats.rows;
            summary.statements = stats.statements;
        }
        self.reporter.info(&format!(
            "Exported {} datasets [+{} x-IDL]",
            summary.records, summary.xidl_splits
        ));
        Ok(summary)
    }

    /// Apply the time-range fix-up and queue the record's row(s).
    fn emit_rows(&mut self, state: &mut Streaming, mut record: MetadataRecord) -> ExportResult<()> {
        if record.fix_time_range()? {
            self.reporter.warn(&format!(
                "The extent of the time range for the \"{}\" dataset seems to be less \
                 than one second: this is not supported by Syntool. One second will be \
                 added to end_datetime in order to fix this.",
                record.dataset
            ));
        }

        match record.antimeridian_split() {
            Some((west, east)) => {
                let west_row = DatasetRow::from_record(&record, &record.dataset, Some(west));
                let east_row =
                    DatasetRow::from_record(&record, record.xidl_dataset_name(), Some(east));
                for row in [west_row, east_row] {
                    let tuple = row_tuple(&state.table, &row)?;
                    state.batch.add(tuple, self.sink.as_mut(), self.reporter)?;
                }
                self.xidl_splits += 1;
            }
            None => {
                let row = DatasetRow::from_record(&record, &record.dataset, None);
                let tuple = row_tuple(&state.table, &row)?;
                state.batch.add(tuple, self.sink.as_mut(), self.reporter)?;
            }
        }
        Ok(())
    }

    /// Write the product upsert and dataset table DDL for the first record.
    fn bootstrap(
        options: &ConvertOptions,
        sink: &mut dyn StatementSink,
        first: &MetadataRecord,
    ) -> ExportResult<Streaming> {
        let raw_id = options
            .product_id
            .as_deref()
            .or(first.syntool_id.as_deref())
            .unwrap_or_default();
        let product_id = ProductId::try_new(raw_id).ok_or_else(|| CoreError::MissingProductId {
            dataset: first.dataset.clone(),
        })?;
        let product_type = first.output_type.as_deref().unwrap_or(DEFAULT_PRODUCT_TYPE);

        let table = dataset_table(&product_id);
        log::debug!("Product '{product_id}' uses table {}", table.name());
        let sql = format!(
            "{}{}",
            product_upsert(&product_id, product_type),
            table.create_table_sql()
        );
        sink.write(&sql)?;

        let batch = BatchWriter::new(&table, options.chunk_size);
        Ok(Streaming { table, batch })
    }
}

/// Write only the products table DDL.
pub fn write_products_ddl(sink: &mut dyn StatementSink) -> ExportResult<()> {
    sink.write(&products_table_ddl())
}

/// Convert every file in `paths`, in order.
///
/// With `options.init_only`, only the products DDL is written and `paths`
/// is not read. The first failing record aborts the run; rows still
/// buffered at that point are dropped.
pub fn convert_files<I, P>(
    paths: I,
    options: ConvertOptions,
    sink: &mut dyn StatementSink,
    reporter: &dyn Reporter,
) -> ExportResult<ConversionSummary>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    if options.init_only {
        options.validate()?;
        if options.validate_sql {
            ValidatingSink::new(sink).write(&products_table_ddl())?;
        } else {
            write_products_ddl(sink)?;
        }
        return Ok(ConversionSummary::default());
    }

    let mut converter = Converter::new(options, sink, reporter)?;
    for path in paths {
        converter.push_file(path.as_ref())?;
    }
    converter.finish()
}

#[cfg(test)]
#[path = "converter_test.rs"]
mod tests;
