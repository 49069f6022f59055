use rusqlite::types::Value;
use rusqlite::Params;
use tracing::{debug, warn};

use super::Gateway;
use crate::error::{ClinicError, Result};
use crate::schema::RecordType;

/// Rows returned by a read, in the order the store delivered them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryRows {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// One entry of `PRAGMA table_info`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub primary_key: bool,
}

impl Gateway {
    /// Run one parameterized write and return the number of affected rows.
    /// The connection is in autocommit mode, so the change is durable once
    /// this returns.
    pub fn execute<P: Params>(&self, statement: &str, params: P) -> Result<usize> {
        debug!(statement, "execute");
        self.conn.execute(statement, params).map_err(|err| {
            warn!(statement, error = %err, "write rejected");
            ClinicError::from(err)
        })
    }

    /// Run one read and collect every row.
    pub fn query(&self, statement: &str) -> Result<QueryRows> {
        debug!(statement, "query");
        let mut stmt = self.conn.prepare(statement)?;
        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();
        let width = columns.len();

        let rows = stmt
            .query_map([], |row| {
                (0..width)
                    .map(|idx| row.get::<_, Value>(idx))
                    .collect::<rusqlite::Result<Vec<_>>>()
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(QueryRows { columns, rows })
    }

    /// Column layout of a table, in declaration order.
    pub fn describe(&self, record_type: RecordType) -> Result<Vec<ColumnInfo>> {
        let mut stmt = self
            .conn
            .prepare(&format!("PRAGMA table_info({})", record_type.table_name()))?;

        let columns = stmt
            .query_map([], |row| {
                Ok(ColumnInfo {
                    name: row.get(1)?,
                    primary_key: row.get::<_, i64>(5)? != 0,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(columns)
    }

    /// Row id assigned by the most recent successful `INSERT`.
    pub fn last_insert_rowid(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}

/// Render a stored value the way the table views and edit forms show it.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(number) => number.to_string(),
        Value::Real(number) => number.to_string(),
        Value::Text(text) => text.clone(),
        Value::Blob(bytes) => format!("<{} bytes>", bytes.len()),
    }
}
