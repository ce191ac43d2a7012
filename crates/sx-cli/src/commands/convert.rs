//! Convert command implementation

use anyhow::{Context, Result};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use sx_export::{convert_files, FileSink, LogReporter, StatementSink, StdoutSink};

use crate::cli::Cli;
use crate::commands::common::ExitCode;

/// Execute a conversion run
pub fn execute(cli: &Cli) -> Result<()> {
    let options = cli.convert_options();

    let mut sink: Box<dyn StatementSink> = if cli.to_stdout() {
        Box::new(StdoutSink)
    } else {
        log::info!("Exporting to {}", cli.output_path);
        let sink = FileSink::create(Path::new(&cli.output_path))
            .context("Failed to prepare output file")?;
        Box::new(sink)
    };

    let paths = if options.init_only {
        Vec::new()
    } else if !cli.files.is_empty() {
        cli.files.clone()
    } else {
        read_path_list(io::stdin().lock()).context("Failed to read metadata paths from stdin")?
    };
    log::debug!("{} metadata file(s) to export", paths.len());

    match convert_files(&paths, options, sink.as_mut(), &LogReporter) {
        Ok(summary) => {
            log::debug!(
                "Wrote {} row(s) in {} statement(s)",
                summary.rows,
                summary.statements
            );
            Ok(())
        }
        Err(err) => match err.missing_input() {
            Some(path) => {
                log::error!("The following file cannot be found: {path}");
                Err(ExitCode(1).into())
            }
            None => Err(anyhow::Error::new(err).context("Conversion failed")),
        },
    }
}

/// Read one path per line, trimming whitespace and skipping blank lines.
pub(crate) fn read_path_list<R: BufRead>(reader: R) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            paths.push(PathBuf::from(trimmed));
        }
    }
    Ok(paths)
}

#[cfg(test)]
#[path = "convert_test.rs"]
mod tests;
