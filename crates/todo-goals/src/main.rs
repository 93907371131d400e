use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};

mod actions;
mod config;
mod domain_models;
mod logger;
mod printer;
mod reducers;
mod script;
mod state;
mod store;

use config::AppConfig;

fn main() -> Result<()> {
    let loaded = AppConfig::load();
    logger::init(&loaded.config.log_level);

    log::info!("Starting todo-goals");
    loaded.log_outcome();
    let config = loaded.config;
    log::debug!("Config: {:?}", config);

    // A script given on the command line wins over the configured one
    let script_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.script.clone());

    let actions = match script_path {
        Some(path) => script::load_script(&path)
            .with_context(|| format!("Failed to load action script {}", path.display()))?,
        None => {
            log::info!("No action script given, running the built-in demo");
            script::demo_scenario()
        }
    };

    let store = store::create_store();
    let printer = store.subscribe(printer::state_printer(Rc::downgrade(&store), config.pretty));
    log::debug!("State printer subscribed as {:?}", printer.id());

    for action in actions {
        log::debug!("Dispatching {}", action.kind());
        store.dispatch(action)?;
    }

    printer.unsubscribe();
    log::info!(
        "Exiting todo-goals ({} slice(s): {})",
        state::AppState::SLICES.len(),
        state::AppState::SLICES.join(", ")
    );
    Ok(())
}
