//! Birth-date parsing, validation and life statistics.
//!
//! All functions take "today" (or "now") explicitly. Use a [`clock::Clock`] to obtain it.

pub mod birth;
pub mod clock;
pub mod stats;
