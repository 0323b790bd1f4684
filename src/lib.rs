//! Your life in weeks.
//!
//! Given a birth date, lifeweeks lays out a 90-year grid of one box per week (52 columns, 90
//! rows) and shades every box as lived, current or remaining. The same grid is exposed as:
//!
//! - a standalone SVG document ([`render::svg`])
//! - a CPU-rasterized RGBA frame and PNG ([`render::cpu`])
//! - JSON statistics and an HTML page served over HTTP ([`server`])
//!
//! Everything under [`dates`], [`layout`] and [`palette`] is pure arithmetic and can be used
//! without a graphics context.
#![forbid(unsafe_code)]

mod foundation;

pub mod dates;
pub mod layout;
pub mod live;
pub mod palette;
pub mod render;
pub mod server;

pub use crate::dates::birth::{
    BirthDate, BirthDateError, ValidationResult, parse_birth_date, validate_birth_date,
};
pub use crate::dates::clock::{Clock, FixedClock, SystemClock};
pub use crate::dates::stats::{
    LifeStats, LiveStats, StatsReport, calculate_life_stats, calculate_live_stats,
    calculate_weeks_lived, life_stats_now, live_stats_now,
};
pub use crate::foundation::core::{
    Point, Rect, SPACING_RATIO, TOTAL_DAYS, TOTAL_WEEKS, TOTAL_YEARS, WEEKS_PER_YEAR,
};
pub use crate::foundation::error::{LifeWeeksError, LifeWeeksResult};
pub use crate::layout::devices::{DEVICE_PRESETS, DevicePreset, find_device};
pub use crate::layout::grid::{GridLayout, Presentation, WeekCell};
pub use crate::live::LiveTicker;
pub use crate::palette::color::{Rgb8, blend_colors};
pub use crate::palette::fade::{WeekState, fade_opacity, faded_week_color, week_color};
pub use crate::palette::theme::{ColorPalette, Theme, ThemeContext};
pub use crate::render::cpu::{FrameRGBA, encode_png, render_frame};
pub use crate::render::scene::{Scene, SceneOptions, describe_cell};
pub use crate::render::svg::render_svg;
pub use crate::server::{AppState, ServerConfig, build_router};
