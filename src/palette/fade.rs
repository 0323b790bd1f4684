use serde::Serialize;

use crate::foundation::core::{FADE_START_WEEKS, MIN_OPACITY};
use crate::palette::color::{Rgb8, blend_colors};
use crate::palette::theme::ColorPalette;

/// How a week relates to the weeks lived so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekState {
    Lived,
    Current,
    Remaining,
}

impl WeekState {
    pub fn of(week_number: u32, weeks_lived: u32) -> Self {
        match week_number.cmp(&weeks_lived) {
            std::cmp::Ordering::Less => Self::Lived,
            std::cmp::Ordering::Equal => Self::Current,
            std::cmp::Ordering::Greater => Self::Remaining,
        }
    }

    /// Short caption used next to a selected week.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lived => "Lived",
            Self::Current => "Now",
            Self::Remaining => "Ahead",
        }
    }
}

/// Flat color of a week. The current week ignores `hovered`.
pub fn week_color(week_number: u32, weeks_lived: u32, hovered: bool, palette: &ColorPalette) -> Rgb8 {
    match (WeekState::of(week_number, weeks_lived), hovered) {
        (WeekState::Current, _) => palette.current,
        (WeekState::Lived, false) => palette.lived,
        (WeekState::Lived, true) => palette.hovered_lived,
        (WeekState::Remaining, false) => palette.remaining,
        (WeekState::Remaining, true) => palette.hovered_remaining,
    }
}

/// Opacity of a lived week after aging, in `[MIN_OPACITY, 1.0]`.
///
/// The last ten years (520 weeks) stay fully opaque. Older weeks fade along a square-root curve
/// across the rest of the lived span, so the drop is quick at first and levels off toward
/// `MIN_OPACITY` for the oldest week. Weeks not yet lived, and anyone under ten, get `1.0`.
pub fn fade_opacity(week_number: u32, weeks_lived: u32) -> f64 {
    if week_number >= weeks_lived {
        return 1.0;
    }

    let weeks_ago = weeks_lived - week_number;
    if weeks_ago <= FADE_START_WEEKS {
        return 1.0;
    }

    let weeks_into_fade = f64::from(weeks_ago - FADE_START_WEEKS);
    let fade_span = f64::from(weeks_lived - FADE_START_WEEKS);
    let progress = (weeks_into_fade / fade_span).min(1.0);
    1.0 - progress.sqrt() * (1.0 - MIN_OPACITY)
}

/// `lived` blended toward `background` by [`fade_opacity`].
///
/// Only meaningful for lived weeks; callers decide when to apply it.
pub fn faded_week_color(
    week_number: u32,
    weeks_lived: u32,
    lived: Rgb8,
    background: Rgb8,
) -> Rgb8 {
    blend_colors(lived, background, fade_opacity(week_number, weeks_lived))
}

#[cfg(test)]
#[path = "../../tests/unit/palette/fade.rs"]
mod tests;
