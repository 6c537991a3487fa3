//! keyed-dispatch: resolve actions by key, falling back to identity.

use strategy_lib::{app, config, errors, logging};

fn main() {
    logging::init();

    // Takes no arguments beyond --help and --version.
    let _ = config::KeyedConfig::parse();
    let result = app::run_keyed(std::io::stdin().lock(), std::io::stdout().lock());
    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        std::process::exit(errors::exit_code(&err));
    }
}
