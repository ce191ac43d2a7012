use super::*;
use crate::reporter::RecordingReporter;
use crate::sink::MemorySink;
use sx_core::ProductId;
use sx_sql::dataset_table;

fn table() -> TableSchema {
    dataset_table(&ProductId::try_new("sst").unwrap())
}

fn tuples_in(statement: &str) -> usize {
    statement.matches("('row").count()
}

#[test]
fn test_flushes_at_capacity() {
    let mut sink = MemorySink::new();
    let reporter = RecordingReporter::new();
    let mut writer = BatchWriter::new(&table(), 2);

    writer.add("('row1')".to_string(), &mut sink, &reporter).unwrap();
    assert!(sink.writes().is_empty());
    assert_eq!(writer.pending(), 1);

    writer.add("('row2')".to_string(), &mut sink, &reporter).unwrap();
    assert_eq!(sink.writes().len(), 1);
    assert_eq!(writer.pending(), 0);
    assert_eq!(reporter.messages(log::Level::Info), vec!["Exporting 2 datasets"]);
}

#[test]
fn test_statement_layout() {
    let mut sink = MemorySink::new();
    let reporter = RecordingReporter::new();
    let table = table();
    let mut writer = BatchWriter::new(&table, 10);
    writer.add("('row1')".to_string(), &mut sink, &reporter).unwrap();
    writer.add("('row2')".to_string(), &mut sink, &reporter).unwrap();
    writer.finish(&mut sink, &reporter).unwrap();

    let expected = format!(
        "{}('row1'),('row2'){}\n",
        table.insert_header(),
        table.upsert_trailer()
    );
    assert_eq!(sink.writes(), &[expected]);
}

#[test]
fn test_batch_bound_and_order() {
    let mut sink = MemorySink::new();
    let reporter = RecordingReporter::new();
    let mut writer = BatchWriter::new(&table(), 3);
    for i in 0..8 {
        writer
            .add(format!("('row{i}')"), &mut sink, &reporter)
            .unwrap();
    }
    let stats = writer.finish(&mut sink, &reporter).unwrap();

    assert_eq!(stats, BatchStats { rows: 8, statements: 3 });
    let counts: Vec<usize> = sink.writes().iter().map(|s| tuples_in(s)).collect();
    assert_eq!(counts, vec![3, 3, 2]);

    let all = sink.contents();
    let positions: Vec<usize> = (0..8)
        .map(|i| all.find(&format!("('row{i}')")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_flush_on_empty_buffer_is_noop() {
    let mut sink = MemorySink::new();
    let reporter = RecordingReporter::new();
    let mut writer = BatchWriter::new(&table(), 5);
    writer.flush(&mut sink, &reporter).unwrap();
    let stats = writer.finish(&mut sink, &reporter).unwrap();
    assert!(sink.writes().is_empty());
    assert!(reporter.entries().is_empty());
    assert_eq!(stats, BatchStats::default());
}

#[test]
fn test_zero_capacity_means_one() {
    let mut sink = MemorySink::new();
    let reporter = RecordingReporter::new();
    let mut writer = BatchWriter::new(&table(), 0);
    assert_eq!(writer.capacity(), 1);
    writer.add("('row1')".to_string(), &mut sink, &reporter).unwrap();
    assert_eq!(sink.writes().len(), 1);
}
