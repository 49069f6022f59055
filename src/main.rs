//! Binary entry point: resolve the data directory, start file logging, open
//! the clinic store, and drive the terminal UI until the user exits.
use pet_clinic_manager::{config, logging, run_app, App, Gateway};

/// Returning a `Result` bubbles fatal startup problems (for example an
/// unwritable home directory) up to the terminal instead of crashing silently.
fn main() -> anyhow::Result<()> {
    logging::init(&config::data_dir()?)?;

    let gateway = Gateway::initialize()?;
    let mut app = App::new(gateway);
    run_app(&mut app)
}
