//! Command handlers for the ticklist CLI.

pub mod add;
pub mod clear;
pub mod list;
pub mod remove;
pub mod status;
pub mod toggle;

use ticklist::engine::render;
use ticklist::engine::store::TaskStore;
use ticklist::engine::view::{self, Filter};

/// Re-renders the whole visible list from the current collection.
fn print_list(store: &TaskStore, filter: Filter) {
    let projection = view::project(store.tasks(), filter);
    let counts = view::counts(store.tasks());
    print!(
        "{}",
        render::list_view(&projection, filter, &counts, chrono::Utc::now())
    );
}
