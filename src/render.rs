//! Renderers for the week grid.
//!
//! [`scene::Scene`] is the backend-independent paint list; [`svg`] serializes it as a document
//! and [`cpu`] rasterizes it with `vello_cpu`.

pub mod cpu;
pub mod scene;
pub mod svg;
mod text;
