// src/gui/actions/mod.rs
//
// Button actions. Layout lives in components; state changes happen here.

mod fetch;
mod select;

pub use fetch::fetch;
pub use select::select_team;
