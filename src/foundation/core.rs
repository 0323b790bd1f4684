pub use kurbo::{Point, Rect};

/// Rows in the grid: one per year of a notional 90-year lifespan.
pub const TOTAL_YEARS: u32 = 90;

/// Columns in the grid.
pub const WEEKS_PER_YEAR: u32 = 52;

/// Boxes in the grid.
pub const TOTAL_WEEKS: u32 = TOTAL_YEARS * WEEKS_PER_YEAR;

/// Average Gregorian year length used for fractional years.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Days in the notional lifespan, `round(90 * 365.25)`.
pub const TOTAL_DAYS: i64 = 32_873;

/// Horizontal padding as a fraction of canvas width (applied on both sides).
pub const PADDING_X_RATIO: f64 = 0.06;

/// Bottom padding as a fraction of canvas height.
pub const PADDING_Y_RATIO: f64 = 0.04;

/// Fraction of each cell left empty between boxes.
pub const SPACING_RATIO: f64 = 0.18;

/// Corner radius as a fraction of the box size.
pub const CORNER_RATIO: f64 = 0.15;

/// Lived weeks younger than this are never faded.
pub const FADE_START_WEEKS: u32 = 10 * WEEKS_PER_YEAR;

/// Opacity floor reached by the oldest lived weeks.
pub const MIN_OPACITY: f64 = 0.15;
