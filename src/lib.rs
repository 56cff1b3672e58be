//! ticklist: a tiny local task list.
//!
//! The engine owns the task collection, its persistence, and the rendering
//! projection; the binary wires user intents to it.

pub mod engine;
