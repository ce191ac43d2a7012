//! CLI argument definitions using clap derive API

use clap::Parser;
use std::path::PathBuf;
use sx_core::{ConvertOptions, DEFAULT_CHUNK_SIZE};

/// Convert Syntool dataset metadata (JSON) into MySQL upsert statements
#[derive(Parser, Debug)]
#[command(name = "syntool-meta2sql")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output path. Use "-" for stdout
    pub output_path: String,

    /// Metadata files; read from stdin, one per line, when omitted
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Only generate SQL tables schema
    #[arg(long)]
    pub init_only: bool,

    /// Max number of datasets exported with one INSERT
    #[arg(long, alias = "chunk_size", env = "SX_CHUNK_SIZE", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Override the identifier of the product
    #[arg(long, alias = "product_id", env = "SX_PRODUCT_ID")]
    pub product_id: Option<String>,

    /// Parse every generated statement before writing it
    #[arg(long)]
    pub validate: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether output goes to stdout.
    pub fn to_stdout(&self) -> bool {
        self.output_path == "-"
    }

    /// Options handed to the export driver.
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            chunk_size: self.chunk_size,
            product_id: self.product_id.clone(),
            init_only: self.init_only,
            validate_sql: self.validate,
        }
    }
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
