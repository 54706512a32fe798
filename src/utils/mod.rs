//! Shared utilities.

pub mod path;
pub mod plural;

pub use plural::count_noun;
