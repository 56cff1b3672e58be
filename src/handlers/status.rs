//! Handler for the `status` command.

use anyhow::Result;
use colored::Colorize;
use ticklist::engine::db::Db;
use ticklist::engine::store::TaskStore;
use ticklist::engine::view;

/// Displays the active/total readout.
///
/// # Errors
/// Returns error if the store cannot be opened.
pub fn handle(json: bool) -> Result<()> {
    let db = Db::open()?;
    let store = TaskStore::new(db.load());
    let counts = view::counts(store.tasks());

    if json {
        println!("{}", serde_json::to_string_pretty(&counts)?);
        return Ok(());
    }

    println!("{} Task Status", "📊".cyan());
    println!("   {} active / {} total", counts.active, counts.total);
    if counts.completed > 0 {
        println!(
            "   {} completed {}",
            counts.completed,
            "(clear-completed prunes them)".dimmed()
        );
    }
    Ok(())
}
