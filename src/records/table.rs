use rusqlite::types::Value;
use rusqlite::{params_from_iter, ToSql};
use tracing::{info, warn};

use crate::db::{display_value, ColumnInfo, Gateway};
use crate::error::{ClinicError, Result};
use crate::models::{Confirmation, RowIdentity, TableSnapshot};
use crate::schema::RecordType;

/// Read every row of a table, exactly as the store delivers it.
pub fn list(gateway: &Gateway, record_type: RecordType) -> Result<TableSnapshot> {
    let result = gateway.query(&format!("SELECT * FROM {}", record_type.table_name()))?;
    Ok(TableSnapshot {
        record_type,
        columns: result.columns,
        rows: result.rows,
    })
}

impl TableSnapshot {
    /// Capture the identity of the row at `position`. The key column is looked
    /// up through the table description rather than assumed to be first.
    pub fn identity_at(&self, gateway: &Gateway, position: usize) -> Result<RowIdentity> {
        let row = self.rows.get(position).ok_or_else(|| {
            ClinicError::Storage(format!(
                "row {position} is not in the current {} listing",
                self.record_type.table_name()
            ))
        })?;

        let primary_key = primary_key_column(&gateway.describe(self.record_type)?)
            .ok_or_else(|| {
                ClinicError::Storage(format!("{} has no columns", self.record_type.table_name()))
            })?;
        let key_position = self
            .columns
            .iter()
            .position(|column| *column == primary_key)
            .ok_or_else(|| ClinicError::Storage(format!("no such column: {primary_key}")))?;

        Ok(RowIdentity {
            record_type: self.record_type,
            primary_key,
            value: row[key_position].clone(),
        })
    }
}

/// Rewrite the supplied columns of the row captured in `identity`. Column
/// names must exist in the table; the row is matched by its original key even
/// when the edits change that key.
pub fn update(
    gateway: &Gateway,
    identity: RowIdentity,
    edits: &[(String, String)],
) -> Result<()> {
    if edits.is_empty() {
        return Ok(());
    }

    let table = identity.record_type.table_name();
    let columns = gateway.describe(identity.record_type)?;
    let mut assignments = Vec::with_capacity(edits.len());
    for (column, _) in edits {
        let known = columns.iter().find(|info| info.name == *column).ok_or_else(|| {
            ClinicError::Storage(format!("no such column: {column} in {table}"))
        })?;
        assignments.push(format!("{} = ?", known.name));
    }

    let statement = format!(
        "UPDATE {table} SET {} WHERE {} = ?",
        assignments.join(", "),
        identity.primary_key
    );
    let params = edits
        .iter()
        .map(|(_, value)| value as &dyn ToSql)
        .chain(std::iter::once(&identity.value as &dyn ToSql));

    let updated = gateway.execute(&statement, params_from_iter(params))?;
    if updated == 0 {
        warn!(%identity, "update matched no row");
        return Err(not_found(&identity));
    }

    info!(%identity, columns = edits.len(), "record updated");
    Ok(())
}

/// Remove the row captured in `identity` once the user has confirmed it.
/// Returns whether a row was deleted; a declined confirmation is a no-op.
pub fn delete(
    gateway: &Gateway,
    identity: RowIdentity,
    confirmation: Confirmation,
) -> Result<bool> {
    if confirmation == Confirmation::Declined {
        info!(%identity, "delete declined");
        return Ok(false);
    }

    let statement = format!(
        "DELETE FROM {} WHERE {} = ?1",
        identity.record_type.table_name(),
        identity.primary_key
    );
    let deleted = gateway.execute(&statement, [&identity.value])?;
    if deleted == 0 {
        warn!(%identity, "delete matched no row");
        return Err(not_found(&identity));
    }

    info!(%identity, "record deleted");
    Ok(true)
}

/// The declared primary key, or the first column when none is flagged.
fn primary_key_column(columns: &[ColumnInfo]) -> Option<String> {
    columns
        .iter()
        .find(|column| column.primary_key)
        .or_else(|| columns.first())
        .map(|column| column.name.clone())
}

fn not_found(identity: &RowIdentity) -> ClinicError {
    ClinicError::Storage(format!(
        "no {} row with {} = {}",
        identity.record_type.table_name(),
        identity.primary_key,
        display_value(&identity.value)
    ))
}

/// Column values of `row` keyed by the snapshot's column names, for tests and
/// callers that prefer names over positions.
pub fn row_by_name<'a>(
    snapshot: &'a TableSnapshot,
    position: usize,
) -> Option<Vec<(&'a str, &'a Value)>> {
    let row = snapshot.rows.get(position)?;
    Some(
        snapshot
            .columns
            .iter()
            .map(String::as_str)
            .zip(row.iter())
            .collect(),
    )
}
