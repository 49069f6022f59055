//! Terminal front-end: tabs for the four tables, a row browser, modal forms
//! for creating and updating records, and a confirmation dialog for deletes.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
