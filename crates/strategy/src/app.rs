//! Application entry points for both dispatch programs.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use strategy_cli::{LinePresenter, Prompter, ResultPresenter};
use strategy_core::constants::{ACTION_PROMPT, VALUE_PROMPT};
use strategy_core::{
    randomized_dispatch, ActionCatalog, DispatchError, DispatchTable, StandardCatalog, Value,
    FIXED_KEY, FIXED_VALUE,
};

use crate::config::RandomizedConfig;

/// Shuffle the standard catalog and print one result per action.
pub fn run_randomized<W: Write>(config: &RandomizedConfig, out: W) -> Result<()> {
    let catalog = StandardCatalog::new();
    let mut rng = match config.seed {
        Some(seed) => {
            debug!(seed, "seeded shuffle");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut presenter = LinePresenter::new(out);
    for line in randomized_dispatch(catalog.actions(), &mut rng) {
        presenter.present(&line)?;
    }
    Ok(())
}

/// Dispatch the fixed key, then one key/value pair read from `input`.
pub fn run_keyed<R: BufRead, W: Write>(input: R, out: W) -> Result<()> {
    let table = keyed_table(&StandardCatalog::new())?;

    let mut presenter = LinePresenter::new(out);
    let first = table.dispatch_strict(FIXED_KEY, &Value::Int(FIXED_VALUE))?;
    presenter.present(&first)?;

    let mut prompter = Prompter::new(input, presenter.into_inner());
    let key = prompter.prompt(ACTION_PROMPT)?;
    let value = prompter.prompt(VALUE_PROMPT)?;

    let mut presenter = LinePresenter::new(prompter.into_output());
    presenter.present(&table.dispatch(&key, &Value::Text(value)))?;
    Ok(())
}

/// Build a dispatch table keyed by each catalog action's name.
pub fn keyed_table(catalog: &dyn ActionCatalog) -> Result<DispatchTable, DispatchError> {
    catalog
        .available()
        .into_iter()
        .try_fold(DispatchTable::builder(), |builder, name| {
            let action = catalog
                .get(name)
                .ok_or_else(|| DispatchError::UnknownAction(name.to_string()))?;
            builder.register(name, action)
        })?
        .build()
}
