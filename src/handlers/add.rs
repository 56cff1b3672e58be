//! Handler for the `add` command.

use anyhow::Result;
use colored::Colorize;
use ticklist::engine::db::Db;
use ticklist::engine::render;
use ticklist::engine::store::TaskStore;
use ticklist::engine::view::Filter;
use tracing::debug;

/// Adds a new task to the front of the list.
///
/// Whitespace-only text is silently ignored; the list is re-rendered either
/// way.
///
/// # Errors
/// Returns error if the store cannot be opened.
pub fn handle(text: &str) -> Result<()> {
    let db = Db::open()?;
    let mut store = TaskStore::new(db.load());

    match store.add(text) {
        Some(task) => {
            db.save(store.tasks());
            println!(
                "{} Added [{}] {}",
                "✓".green(),
                task.short_id().yellow(),
                render::escape(&task.text)
            );
        }
        None => debug!("ignoring empty add"),
    }

    super::print_list(&store, Filter::All);
    Ok(())
}
