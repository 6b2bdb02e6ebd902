//! CSV table output
//!
//! Turns the accumulated record collection into one delimited file. The
//! column set is not fixed up front: it is the union of the field names the
//! remote API actually returned, in first-seen order.

mod table;
mod writer;

pub use table::{render_cell, table_columns};
pub use writer::{CsvTableWriter, CsvWriterConfig};
