use serde::{Deserialize, Serialize};

use crate::foundation::core::{
    CORNER_RATIO, PADDING_X_RATIO, PADDING_Y_RATIO, Point, Rect, SPACING_RATIO, TOTAL_WEEKS,
    TOTAL_YEARS, WEEKS_PER_YEAR,
};

/// One box of the grid: `year` is the row (age), `week` the column within that year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekCell {
    pub year: u32,
    pub week: u32,
}

impl WeekCell {
    /// `None` when outside `[0, 90) x [0, 52)`.
    pub fn new(year: u32, week: u32) -> Option<Self> {
        (year < TOTAL_YEARS && week < WEEKS_PER_YEAR).then_some(Self { year, week })
    }

    /// Cell holding `week_number`. `None` past the end of the grid.
    pub fn from_week_number(week_number: u32) -> Option<Self> {
        (week_number < TOTAL_WEEKS).then(|| Self {
            year: week_number / WEEKS_PER_YEAR,
            week: week_number % WEEKS_PER_YEAR,
        })
    }

    /// `year * 52 + week`.
    pub fn week_number(self) -> u32 {
        self.year * WEEKS_PER_YEAR + self.week
    }

    /// All cells, row by row.
    pub fn all() -> impl Iterator<Item = WeekCell> {
        (0..TOTAL_YEARS).flat_map(|year| (0..WEEKS_PER_YEAR).map(move |week| WeekCell { year, week }))
    }
}

/// Where a grid is shown; decides how much height is reserved above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    /// Shareable image / phone wallpaper. Leaves room for a lock-screen clock; the subtitle
    /// goes below the grid.
    #[default]
    Export,
    /// Interactive page canvas with title and subtitle above the grid.
    Canvas,
    /// Full-screen live wallpaper: grid and year markers only.
    Fullscreen,
}

impl Presentation {
    /// Fraction of the canvas height reserved above the grid.
    pub fn top_space_ratio(self) -> f64 {
        match self {
            Self::Export => 0.25,
            Self::Canvas => 0.08,
            Self::Fullscreen => 0.02,
        }
    }
}

impl std::str::FromStr for Presentation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "export" | "image" | "wallpaper" => Ok(Self::Export),
            "canvas" => Ok(Self::Canvas),
            "fullscreen" => Ok(Self::Fullscreen),
            other => Err(format!(
                "unknown presentation \"{other}\" (expected export, canvas or fullscreen)"
            )),
        }
    }
}

/// Grid geometry for one canvas size.
///
/// The cell size is limited by whichever of width or height is tighter, so the full 52x90 grid
/// always fits without distortion; the grid is centred horizontally and starts right below the
/// reserved top space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GridLayout {
    pub padding_x: f64,
    pub padding_y: f64,
    pub top_space: f64,
    pub cell_size: f64,
    pub box_size: f64,
    pub border_radius: f64,
    pub grid_width: f64,
    pub grid_height: f64,
    pub start_x: f64,
    pub start_y: f64,
}

impl GridLayout {
    /// Derive the geometry for a `width` x `height` canvas with `top_space_ratio` of the height
    /// reserved above the grid. Degenerate sizes give degenerate (but finite) geometry.
    pub fn compute(width: f64, height: f64, top_space_ratio: f64) -> Self {
        let padding_x = width * PADDING_X_RATIO;
        let padding_y = height * PADDING_Y_RATIO;
        let top_space = height * top_space_ratio;

        let available_width = width - 2.0 * padding_x;
        let available_height = height - padding_y - top_space;

        let cell_width = available_width / f64::from(WEEKS_PER_YEAR);
        let cell_height = available_height / f64::from(TOTAL_YEARS);
        let cell_size = cell_width.min(cell_height);

        let box_size = cell_size * (1.0 - SPACING_RATIO);
        let border_radius = (box_size * CORNER_RATIO).max(1.0);

        let grid_width = f64::from(WEEKS_PER_YEAR) * cell_size;
        let grid_height = f64::from(TOTAL_YEARS) * cell_size;

        Self {
            padding_x,
            padding_y,
            top_space,
            cell_size,
            box_size,
            border_radius,
            grid_width,
            grid_height,
            start_x: (width - grid_width) / 2.0,
            start_y: top_space,
        }
    }

    /// Geometry for a presentation's reserved top space.
    pub fn for_presentation(width: f64, height: f64, presentation: Presentation) -> Self {
        Self::compute(width, height, presentation.top_space_ratio())
    }

    /// Box rectangle of `cell`, centred inside its cell.
    pub fn cell_rect(&self, cell: WeekCell) -> Rect {
        let inset = (self.cell_size - self.box_size) / 2.0;
        let x = self.start_x + f64::from(cell.week) * self.cell_size + inset;
        let y = self.start_y + f64::from(cell.year) * self.cell_size + inset;
        Rect::new(x, y, x + self.box_size, y + self.box_size)
    }

    /// Cell under a pointer position, or `None` outside the grid.
    ///
    /// Hits are per cell, so the spacing around a box belongs to that box.
    pub fn cell_at(&self, point: Point) -> Option<WeekCell> {
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return None;
        }
        let col = ((point.x - self.start_x) / self.cell_size).floor();
        let row = ((point.y - self.start_y) / self.cell_size).floor();
        if !(0.0..f64::from(WEEKS_PER_YEAR)).contains(&col)
            || !(0.0..f64::from(TOTAL_YEARS)).contains(&row)
        {
            return None;
        }
        WeekCell::new(row as u32, col as u32)
    }

    /// Whole grid bounds.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.start_x,
            self.start_y,
            self.start_x + self.grid_width,
            self.start_y + self.grid_height,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
