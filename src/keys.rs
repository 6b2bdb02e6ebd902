//! Key normalization and key-list input
//!
//! Keys are CNPJ tax-registration numbers. CSV exports tend to strip their
//! leading zeros (spreadsheets read them as integers), so every key is
//! re-padded to the fixed 14-digit form before it is used in a request.

use crate::error::{Error, Result};
use std::path::Path;
use tracing::info;

/// Fixed width of a normalized CNPJ
pub const CNPJ_WIDTH: usize = 14;

/// Column names probed, in order, when no column is given explicitly
const CNPJ_COLUMNS: [&str; 2] = ["cnpj_orgao", "cnpjCpfOrgao"];

/// Normalize a CNPJ to a fixed-width, zero-padded string
///
/// Left-pads with `'0'` to 14 characters; values already at least that long
/// pass through unchanged, which makes the operation idempotent.
pub fn normalize_cnpj(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() >= CNPJ_WIDTH {
        trimmed.to_string()
    } else {
        format!("{trimmed:0>width$}", width = CNPJ_WIDTH)
    }
}

/// Read an ordered key list from a column of a prior CSV export
///
/// When `column` is `None` the CNPJ column is auto-detected among the names
/// earlier collection runs produce. Empty cells are dropped; every surviving
/// key is normalized. Unlike per-page fetch failures, any error here is fatal
/// to the run.
pub fn keys_from_csv(path: &Path, column: Option<&str>) -> Result<Vec<String>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let column = match column {
        Some(name) => name.to_string(),
        None => CNPJ_COLUMNS
            .iter()
            .find(|name| headers.iter().any(|h| h == **name))
            .map(|name| (*name).to_string())
            .ok_or_else(|| {
                Error::key_source(format!(
                    "no CNPJ column found in {} (expected one of: {})",
                    path.display(),
                    CNPJ_COLUMNS.join(", ")
                ))
            })?,
    };

    let index = headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| {
            Error::key_source(format!("column '{column}' not found in {}", path.display()))
        })?;

    let mut keys = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cell = record.get(index).unwrap_or("").trim();
        if cell.is_empty() {
            continue;
        }
        keys.push(normalize_cnpj(cell));
    }

    info!(path = %path.display(), column = column.as_str(), keys = keys.len(), "key list loaded");
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use test_case::test_case;

    #[test_case("1", "00000000000001"; "single digit")]
    #[test_case("123456789012", "00123456789012"; "twelve digits")]
    #[test_case("12345678901234", "12345678901234"; "already full width")]
    #[test_case("  42  ", "00000000000042"; "whitespace trimmed")]
    #[test_case("", "00000000000000"; "empty pads to zeros")]
    fn test_normalize_cnpj(input: &str, expected: &str) {
        assert_eq!(normalize_cnpj(input), expected);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["1", "123456789012", "12345678901234", "123456789012345"] {
            let once = normalize_cnpj(raw);
            assert_eq!(normalize_cnpj(&once), once);
        }
    }

    #[test]
    fn test_normalize_pads_suffix_preserving() {
        let normalized = normalize_cnpj("987654");
        assert_eq!(normalized.len(), CNPJ_WIDTH);
        assert!(normalized.ends_with("987654"));
        assert!(normalized.starts_with('0'));
    }

    #[test]
    fn test_overlong_value_passes_through() {
        assert_eq!(normalize_cnpj("123456789012345"), "123456789012345");
    }

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_keys_from_csv_auto_detects_column() {
        let file = write_csv("nome,cnpj_orgao\nAlpha,1\nBeta,123456789012\n");
        let keys = keys_from_csv(file.path(), None).unwrap();
        assert_eq!(keys, vec!["00000000000001", "00123456789012"]);
    }

    #[test]
    fn test_keys_from_csv_fallback_column() {
        let file = write_csv("cnpjCpfOrgao\n26989715000102\n");
        let keys = keys_from_csv(file.path(), None).unwrap();
        assert_eq!(keys, vec!["26989715000102"]);
    }

    #[test]
    fn test_keys_from_csv_explicit_column() {
        let file = write_csv("a,tax_id\nx,7\n");
        let keys = keys_from_csv(file.path(), Some("tax_id")).unwrap();
        assert_eq!(keys, vec!["00000000000007"]);
    }

    #[test]
    fn test_keys_from_csv_skips_empty_cells() {
        let file = write_csv("cnpj_orgao\n1\n\n  \n2\n");
        let keys = keys_from_csv(file.path(), None).unwrap();
        assert_eq!(keys, vec!["00000000000001", "00000000000002"]);
    }

    #[test]
    fn test_keys_from_csv_missing_column_is_fatal() {
        let file = write_csv("nome,sigla\nAlpha,A\n");
        let err = keys_from_csv(file.path(), None).unwrap_err();
        assert!(matches!(err, Error::KeySource { .. }));

        let err = keys_from_csv(file.path(), Some("cnpj")).unwrap_err();
        assert!(matches!(err, Error::KeySource { .. }));
    }

    #[test]
    fn test_keys_from_csv_preserves_order_and_duplicates() {
        let file = write_csv("cnpj_orgao\n2\n1\n2\n");
        let keys = keys_from_csv(file.path(), None).unwrap();
        assert_eq!(
            keys,
            vec!["00000000000002", "00000000000001", "00000000000002"]
        );
    }
}
