//! Column-name normalization and identifier quoting
//!
//! Raw CSV headers can contain characters that are awkward in SQL
//! identifiers. [`normalize_columns`] maps them into safe names; since
//! normalization can collide two distinct headers, [`check_unique`] must run
//! before the columns reach DDL. [`quote_ident`] is the only path by which
//! user-derived names are embedded into SQL text.

use crate::error::{Error, Result};
use std::collections::HashSet;


/// Normalize raw header names into database column names.
///
/// Replaces every `:` and `-` with `_`, preserving order and count. Does not
/// deduplicate; callers must treat post-normalization collisions as a schema
/// error. Idempotent.
pub fn normalize_columns(header: &[String]) -> Vec<String> {
    header
        .iter()
        .map(|name| name.replace([':', '-'], "_"))
        .collect()
}

/// Reject column sequences that contain duplicate names.
pub fn check_unique(columns: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.as_str()) {
            return Err(Error::schema(format!(
                "duplicate column name '{column}' after normalization"
            )));
        }
    }
    Ok(())
}

/// Quote an identifier for safe embedding in SQL.
///
/// Wraps the name in double quotes and doubles embedded quotes, so arbitrary
/// file- or header-derived names cannot break out of the identifier position.
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
