//! randomized-dispatch: invoke the catalog in a random order.

use strategy_lib::{app, config, errors, logging};

fn main() {
    logging::init();

    let config = config::RandomizedConfig::parse();
    if let Err(err) = app::run_randomized(&config, std::io::stdout().lock()) {
        eprintln!("Error: {err:#}");
        std::process::exit(errors::exit_code(&err));
    }
}
