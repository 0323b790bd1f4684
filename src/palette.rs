//! Colors: RGB parsing and blending, the age fade, and light/dark palettes.

pub mod color;
pub mod fade;
pub mod theme;
