use std::collections::HashMap;

use rusqlite::params_from_iter;
use tracing::{info, warn};

use crate::db::Gateway;
use crate::error::{ClinicError, Result};
use crate::schema::RecordType;

/// Validate the submitted inputs for `record_type` and insert one row.
///
/// Every declared field must be present and non-empty; that check finishes
/// before any statement runs, so a rejected submission never touches the
/// store. Values are bound exactly as typed and left to the column affinity.
/// Returns the id the store assigned.
pub fn submit(
    gateway: &Gateway,
    record_type: RecordType,
    values: &HashMap<String, String>,
) -> Result<i64> {
    let mut ordered = Vec::with_capacity(record_type.fields().len());
    for field in record_type.fields() {
        match values.get(field.name) {
            Some(value) if !value.is_empty() => ordered.push(value.as_str()),
            _ => {
                return Err(ClinicError::Validation(format!(
                    "missing required field: {}",
                    field.plain_label()
                )))
            }
        }
    }

    match gateway.execute(&record_type.insert_statement(), params_from_iter(ordered)) {
        Ok(_) => {
            let id = gateway.last_insert_rowid();
            info!(table = record_type.table_name(), id, "record created");
            Ok(id)
        }
        Err(err) => {
            warn!(table = record_type.table_name(), error = %err, "record rejected");
            Err(err)
        }
    }
}
