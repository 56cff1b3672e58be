//! Handler for the `clear-completed` command.

use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use ticklist::engine::db::Db;
use ticklist::engine::store::TaskStore;
use ticklist::engine::view::{self, Filter};

/// Removes every completed task after confirmation.
///
/// With nothing completed this neither prompts nor writes. Declining the
/// prompt leaves the collection and the store untouched.
///
/// # Errors
/// Returns error if the store cannot be opened or stdin cannot be read.
pub fn handle(yes: bool) -> Result<()> {
    let db = Db::open()?;
    let mut store = TaskStore::new(db.load());

    let completed = view::counts(store.tasks()).completed;
    if completed == 0 {
        println!("   (no completed tasks)");
        return Ok(());
    }

    if !yes && !confirm(&format!("Remove {completed} completed task(s)?"))? {
        println!("Aborted.");
        return Ok(());
    }

    let removed = store.clear_completed();
    db.save(store.tasks());
    println!("{} Cleared {removed} completed task(s)", "✓".green());

    super::print_list(&store, Filter::All);
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N]: ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(matches!(
        input.trim().to_lowercase().as_str(),
        "y" | "yes"
    ))
}
