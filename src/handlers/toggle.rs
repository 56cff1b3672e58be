//! Handler for the `toggle` command.

use anyhow::Result;
use ticklist::engine::db::Db;
use ticklist::engine::store::TaskStore;
use ticklist::engine::view::Filter;
use tracing::debug;

/// Flips a task between active and completed.
///
/// `id` may be a full task id or a unique prefix. An unknown or ambiguous
/// reference is a silent no-op; the re-rendered list is the feedback.
///
/// # Errors
/// Returns error if the store cannot be opened.
pub fn handle(id: &str) -> Result<()> {
    let db = Db::open()?;
    let mut store = TaskStore::new(db.load());

    match store.resolve(id) {
        Some(full_id) => {
            if store.toggle(&full_id) {
                db.save(store.tasks());
            }
        }
        None => debug!("no task matches '{id}', toggle ignored"),
    }

    super::print_list(&store, Filter::All);
    Ok(())
}
