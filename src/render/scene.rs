use chrono::NaiveDate;

use crate::dates::stats::LifeStats;
use crate::foundation::core::{Rect, TOTAL_WEEKS, TOTAL_YEARS};
use crate::foundation::format::{group_thousands, long_date};
use crate::layout::grid::{GridLayout, Presentation, WeekCell};
use crate::palette::color::Rgb8;
use crate::palette::fade::{WeekState, faded_week_color, week_color};
use crate::palette::theme::ColorPalette;

const TITLE: &str = "YOUR LIFE IN WEEKS";
const MARKER_GAP: f64 = 8.0;

/// Inputs for [`Scene::build`] besides the birth date and stats.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    pub width: u32,
    pub height: u32,
    pub presentation: Presentation,
    pub palette: ColorPalette,
    /// Blend older lived weeks toward the background.
    pub fade: bool,
    /// Week drawn with the hover colors.
    pub selected: Option<WeekCell>,
    /// Title, subtitle and year markers.
    pub labels: bool,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            width: 1170,
            height: 2532,
            presentation: Presentation::Export,
            palette: ColorPalette::LIGHT,
            fade: false,
            selected: None,
            labels: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellPaint {
    pub cell: WeekCell,
    pub rect: Rect,
    pub radius: f64,
    pub color: Rgb8,
    pub state: WeekState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Serif,
    Monospace,
}

impl FontFamily {
    /// CSS `font-family` list, concrete names first so lookups succeed without fontconfig
    /// generic aliases.
    pub fn css(self) -> &'static str {
        match self {
            Self::Serif => "Georgia, 'DejaVu Serif', 'Liberation Serif', 'Noto Serif', serif",
            Self::Monospace => {
                "'DejaVu Sans Mono', 'Liberation Mono', 'Noto Sans Mono', Menlo, monospace"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// One line of text; `(x, y)` is the anchor point on the alphabetic baseline.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub weight: u16,
    pub family: FontFamily,
    pub anchor: TextAnchor,
    pub color: Rgb8,
}

/// Everything a renderer paints, in order: background, cells, labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgb8,
    pub layout: GridLayout,
    pub weeks_lived: u32,
    pub cells: Vec<CellPaint>,
    pub labels: Vec<TextLabel>,
}

impl Scene {
    #[tracing::instrument(level = "debug", skip(stats, opts), fields(width = opts.width, height = opts.height))]
    pub fn build(stats: &LifeStats, birth: NaiveDate, opts: &SceneOptions) -> Self {
        let w = f64::from(opts.width);
        let h = f64::from(opts.height);
        let layout = GridLayout::for_presentation(w, h, opts.presentation);
        tracing::debug!(
            cell_size = layout.cell_size,
            start_x = layout.start_x,
            start_y = layout.start_y,
            "grid layout"
        );

        let palette = &opts.palette;
        let weeks_lived = stats.weeks_lived;
        let cells = WeekCell::all()
            .map(|cell| {
                let n = cell.week_number();
                let hovered = opts.selected == Some(cell);
                let state = WeekState::of(n, weeks_lived);
                let color = if opts.fade && state == WeekState::Lived && !hovered {
                    faded_week_color(n, weeks_lived, palette.lived, palette.background)
                } else {
                    week_color(n, weeks_lived, hovered, palette)
                };
                CellPaint {
                    cell,
                    rect: layout.cell_rect(cell),
                    radius: layout.border_radius,
                    color,
                    state,
                }
            })
            .collect();

        let labels = if opts.labels {
            build_labels(&layout, stats, birth, opts)
        } else {
            Vec::new()
        };

        Self {
            width: opts.width,
            height: opts.height,
            background: palette.background,
            layout,
            weeks_lived,
            cells,
            labels,
        }
    }

    /// Caption for a cell of this scene.
    pub fn caption(&self, cell: WeekCell) -> String {
        describe_cell(cell, self.weeks_lived)
    }
}

/// `Year 35, Week 3 • Lived` (1-based year and week).
pub fn describe_cell(cell: WeekCell, weeks_lived: u32) -> String {
    format!(
        "Year {}, Week {} \u{2022} {}",
        cell.year + 1,
        cell.week + 1,
        WeekState::of(cell.week_number(), weeks_lived).label()
    )
}

fn subtitle(stats: &LifeStats, birth: NaiveDate) -> String {
    format!(
        "Born {} \u{b7} {} of {} weeks",
        long_date(birth),
        group_thousands(u64::from(stats.weeks_lived)),
        group_thousands(u64::from(TOTAL_WEEKS)),
    )
}

fn build_labels(
    layout: &GridLayout,
    stats: &LifeStats,
    birth: NaiveDate,
    opts: &SceneOptions,
) -> Vec<TextLabel> {
    let w = f64::from(opts.width);
    let h = f64::from(opts.height);
    let palette = &opts.palette;
    let mut labels = Vec::new();

    match opts.presentation {
        Presentation::Canvas => {
            labels.push(TextLabel {
                text: TITLE.to_owned(),
                x: w / 2.0,
                y: layout.top_space * 0.4,
                size: (h * 0.022).max(16.0),
                weight: 600,
                family: FontFamily::Serif,
                anchor: TextAnchor::Middle,
                color: palette.text_primary,
            });
            labels.push(TextLabel {
                text: subtitle(stats, birth),
                x: w / 2.0,
                y: layout.top_space * 0.65,
                size: (h * 0.013).max(11.0),
                weight: 400,
                family: FontFamily::Monospace,
                anchor: TextAnchor::Middle,
                color: palette.text_secondary,
            });
        }
        Presentation::Export => {
            // The space above the grid stays clear for the lock-screen clock.
            labels.push(TextLabel {
                text: subtitle(stats, birth),
                x: w / 2.0,
                y: layout.start_y + layout.grid_height + layout.padding_y * 0.6,
                size: (h * 0.011).max(11.0),
                weight: 400,
                family: FontFamily::Monospace,
                anchor: TextAnchor::Middle,
                color: palette.text_secondary,
            });
        }
        Presentation::Fullscreen => {}
    }

    let marker_size = match opts.presentation {
        Presentation::Canvas => (h * 0.01).max(9.0),
        Presentation::Export | Presentation::Fullscreen => (h * 0.012).max(9.0),
    };
    let marker = |text: String, y: f64| TextLabel {
        text,
        x: layout.start_x - MARKER_GAP,
        y,
        size: marker_size,
        weight: 400,
        family: FontFamily::Monospace,
        anchor: TextAnchor::End,
        color: palette.text_muted,
    };
    for year in (0..TOTAL_YEARS).step_by(10) {
        let y = layout.start_y + f64::from(year) * layout.cell_size + layout.cell_size / 2.0 + 3.0;
        labels.push(marker(year.to_string(), y));
    }
    labels.push(marker(
        TOTAL_YEARS.to_string(),
        layout.start_y + layout.grid_height,
    ));

    labels
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
