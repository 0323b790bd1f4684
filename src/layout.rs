//! Pixel geometry of the week grid.

pub mod devices;
pub mod grid;
