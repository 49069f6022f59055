//! Core library surface for the Pet Clinic Manager.
//!
//! The record core (schema registry, persistence gateway, form and table
//! handlers) is usable on its own; the terminal UI in `ui` is one consumer of
//! it and the `bin` target wires the two together.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod records;
pub mod schema;
pub mod ui;

/// The owned store connection every handler borrows.
pub use db::Gateway;

/// Error taxonomy and the tri-state outcome the UI renders.
pub use error::{ClinicError, Outcome};

pub use models::{Confirmation, RowIdentity, TableSnapshot};
pub use schema::RecordType;

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
