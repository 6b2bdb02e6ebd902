//! CSV file writer

use super::table::{render_cell, table_columns};
use crate::error::Result;
use crate::types::{JsonValue, Record};
use std::fs;
use std::path::Path;
use tracing::info;

/// Configuration for the CSV writer
#[derive(Debug, Clone)]
pub struct CsvWriterConfig {
    /// Field delimiter
    pub delimiter: u8,
}

impl Default for CsvWriterConfig {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

/// Writes a record collection as one delimited file
#[derive(Debug, Clone, Default)]
pub struct CsvTableWriter {
    config: CsvWriterConfig,
}

impl CsvTableWriter {
    /// Create a writer with the default comma delimiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with custom configuration
    pub fn with_config(config: CsvWriterConfig) -> Self {
        Self { config }
    }

    /// Write all records to `path`, creating missing parent directories
    ///
    /// Returns the number of data rows written. An empty collection still
    /// produces the file, with no header and no rows.
    pub fn write(&self, path: &Path, records: &[Record]) -> Result<usize> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                info!(dir = %parent.display(), "created output directory");
            }
        }

        let columns = table_columns(records);
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .from_path(path)?;

        if columns.is_empty() {
            writer.flush()?;
            info!(path = %path.display(), rows = 0, "table written");
            return Ok(0);
        }

        writer.write_record(&columns)?;
        for record in records {
            let row: Vec<String> = columns
                .iter()
                .map(|column| render_cell(field(record, column)))
                .collect();
            writer.write_record(&row)?;
        }
        writer.flush()?;

        info!(
            path = %path.display(),
            rows = records.len(),
            columns = columns.len(),
            "table written"
        );
        Ok(records.len())
    }
}

/// Look up a field on a record, if the record is an object
fn field<'a>(record: &'a Record, column: &str) -> Option<&'a JsonValue> {
    match record {
        JsonValue::Object(obj) => obj.get(column),
        _ => None,
    }
}
