//! Persistence gateway split across logical submodules.

mod connection;
mod statements;

pub use connection::Gateway;
pub use statements::{display_value, ColumnInfo, QueryRows};
