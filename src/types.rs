//! Common types used throughout the harvester

use std::collections::HashMap;

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// One row returned by the remote API
///
/// The API enforces no schema; a record is an open-ended mapping from field
/// name to scalar or nested JSON value, kept as-is until export.
pub type Record = JsonValue;

/// Generic key-value map with string keys and values
pub type StringMap = HashMap<String, String>;
