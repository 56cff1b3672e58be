//! Handler for the `list` command.

use anyhow::Result;
use serde::Serialize;
use ticklist::engine::db::Db;
use ticklist::engine::store::TaskStore;
use ticklist::engine::types::Task;
use ticklist::engine::view::{self, Counts, Filter};

/// Lists tasks through the given filter.
///
/// # Errors
/// Returns error if the store cannot be opened.
pub fn handle(filter: Filter, json: bool) -> Result<()> {
    let db = Db::open()?;
    let store = TaskStore::new(db.load());

    if json {
        return print_json(&store, filter);
    }

    super::print_list(&store, filter);
    Ok(())
}

#[derive(Serialize)]
struct ListReport<'a> {
    filter: String,
    counts: Counts,
    tasks: Vec<&'a Task>,
}

fn print_json(store: &TaskStore, filter: Filter) -> Result<()> {
    let report = ListReport {
        filter: filter.to_string(),
        counts: view::counts(store.tasks()),
        tasks: view::project(store.tasks(), filter),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
