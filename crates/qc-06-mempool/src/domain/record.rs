//! Single-record parsing for mempool snapshots.

use super::entities::{MempoolTransaction, TxId};
use super::errors::{MempoolError, Result};

/// Number of fields in a snapshot record: txid, fee, weight, parents.
pub const RECORD_FIELDS: usize = 4;

/// Delimiters used by a snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordFormat {
    /// Separates the four record fields.
    pub field_delimiter: char,
    /// Separates ids inside the parent field.
    pub parent_delimiter: char,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self {
            field_delimiter: ',',
            parent_delimiter: ';',
        }
    }
}

impl RecordFormat {
    /// Creates a format, rejecting identical delimiters.
    pub fn new(field_delimiter: char, parent_delimiter: char) -> Result<Self> {
        if field_delimiter == parent_delimiter {
            return Err(MempoolError::AmbiguousDelimiters(field_delimiter));
        }
        Ok(Self {
            field_delimiter,
            parent_delimiter,
        })
    }
}

/// Parse one record into a transaction.
///
/// Surrounding whitespace is trimmed from every field. An empty parent field
/// means the transaction has no parents. Only the line ending is stripped
/// before splitting, so a whitespace field delimiter keeps its trailing
/// empty parent field.
pub fn parse_record(line: &str, format: &RecordFormat) -> Result<MempoolTransaction> {
    let fields: Vec<&str> = line
        .trim_end_matches(['\r', '\n'])
        .split(format.field_delimiter)
        .map(str::trim)
        .collect();

    if fields.len() != RECORD_FIELDS {
        return Err(MempoolError::FieldCount {
            expected: RECORD_FIELDS,
            found: fields.len(),
        });
    }

    let fee = parse_amount("fee", fields[1])?;
    let weight = parse_amount("weight", fields[2])?;
    let parents = parse_parents(fields[3], format.parent_delimiter);

    MempoolTransaction::new(fields[0], fee, weight, parents)
}

fn parse_amount(field: &'static str, raw: &str) -> Result<u64> {
    raw.parse().map_err(|_| MempoolError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

fn parse_parents(raw: &str, delimiter: char) -> Vec<TxId> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(delimiter).map(|p| p.trim().to_string()).collect()
}
