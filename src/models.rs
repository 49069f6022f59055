//! Data holders passed between the record handlers and the terminal UI. They
//! stay deliberately dumb: the handlers own every rule about how rows are
//! addressed and written back.

use std::fmt;

use rusqlite::types::Value;

use crate::db::display_value;
use crate::schema::RecordType;

/// Everything one `list` call returned for a table. Positions into `rows` are
/// only meaningful until the next update or delete.
#[derive(Debug, Clone, PartialEq)]
pub struct TableSnapshot {
    pub record_type: RecordType,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl TableSnapshot {
    /// A snapshot with no rows, used while a table has not loaded yet.
    pub fn empty(record_type: RecordType) -> Self {
        Self {
            record_type,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Text for every cell of the row at `position`.
    pub fn display_row(&self, position: usize) -> Option<Vec<String>> {
        self.rows
            .get(position)
            .map(|row| row.iter().map(display_value).collect())
    }
}

/// Identity of one row captured before it is edited or removed. The key value
/// is the one the row had when the snapshot was taken, so an edit that also
/// rewrites the key still targets the right row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowIdentity {
    pub record_type: RecordType,
    pub primary_key: String,
    pub value: Value,
}

impl fmt::Display for RowIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} = {}",
            self.record_type,
            self.primary_key,
            display_value(&self.value)
        )
    }
}

/// Whether the user agreed to a destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}
