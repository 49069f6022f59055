//! Generic record handlers: one path for creating rows from form inputs and
//! one for listing, updating and deleting rows addressed by primary key.

mod form;
mod table;

pub use form::submit;
pub use table::{delete, list, row_by_name, update};
