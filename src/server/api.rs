use axum::{
    Json,
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::birth::BirthDate;
use crate::dates::stats::{LifeStats, StatsReport};
use crate::foundation::core::Point;
use crate::layout::devices::{DEVICE_PRESETS, DevicePreset, find_device};
use crate::layout::grid::{GridLayout, Presentation, WeekCell};
use crate::palette::theme::ColorPalette;
use crate::render::cpu::{encode_png, render_frame};
use crate::render::scene::{Scene, SceneOptions};
use crate::render::svg::render_svg;
use crate::server::config::ServerConfig;
use crate::server::problem::{ApiError, ApiResult};
use crate::server::state::AppState;

pub const DEFAULT_IMAGE_WIDTH: u32 = 1170;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 2532;

/// Query of `GET /api/image`. Everything arrives as text so malformed values produce the
/// JSON error body instead of an extractor rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageQuery {
    pub birth_date: Option<String>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub dark: Option<String>,
    pub device: Option<String>,
    pub fade: Option<String>,
    pub presentation: Option<String>,
    pub format: Option<String>,
    pub week: Option<String>,
    pub x: Option<String>,
    pub y: Option<String>,
    pub lived_color: Option<String>,
    pub remaining_color: Option<String>,
    pub background_color: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Svg,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "svg" => Ok(Self::Svg),
            other => Err(format!("unknown format \"{other}\" (expected png or svg)")),
        }
    }
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Svg => "image/svg+xml; charset=utf-8",
        }
    }
}

/// A validated image request.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageJob {
    pub birth: BirthDate,
    pub stats: LifeStats,
    pub format: OutputFormat,
    pub options: SceneOptions,
}

impl ImageJob {
    pub fn filename(&self) -> String {
        format!("life-in-weeks-{}.{}", self.birth, self.format.extension())
    }
}

/// Query flags count as set when present with an empty value, `true` or `1`.
pub fn flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("" | "true" | "1")
    )
}

fn parse_number<T: std::str::FromStr>(name: &str, raw: Option<&str>) -> ApiResult<Option<T>> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) => s
            .parse()
            .map(Some)
            .map_err(|_| ApiError::bad_request(format!("{name} must be a number"))),
    }
}

/// Like [`parse_number`], but an integer that does not fit a `u32` (too large or negative) is
/// reported with `out_of_range` instead of as malformed.
fn parse_count(
    name: &str,
    raw: Option<&str>,
    out_of_range: impl FnOnce() -> String,
) -> ApiResult<Option<u32>> {
    let Some(s) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match s.parse::<u32>() {
        Ok(v) => Ok(Some(v)),
        Err(_) if is_integer(s) => Err(ApiError::bad_request(out_of_range())),
        Err(_) => Err(ApiError::bad_request(format!("{name} must be a number"))),
    }
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

const WEEK_OUT_OF_RANGE: &str = "week must be between 0 and 4679";

/// Validate every parameter of an image query against `config` as of `today`.
pub fn resolve_image_query(
    q: &ImageQuery,
    config: &ServerConfig,
    today: NaiveDate,
) -> ApiResult<ImageJob> {
    let birth = BirthDate::parse(q.birth_date.as_deref(), today)?;

    let device: Option<&DevicePreset> = match q.device.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(name) => Some(
            find_device(name)
                .ok_or_else(|| ApiError::bad_request(format!("unknown device \"{name}\"")))?,
        ),
    };
    let (width, height) = match device {
        Some(d) => (d.width, d.height),
        None => (
            parse_count("width", q.width.as_deref(), || {
                config.dimension_out_of_range("width")
            })?
            .unwrap_or(DEFAULT_IMAGE_WIDTH),
            parse_count("height", q.height.as_deref(), || {
                config.dimension_out_of_range("height")
            })?
            .unwrap_or(DEFAULT_IMAGE_HEIGHT),
        ),
    };
    let width = config
        .check_dimension("width", width)
        .map_err(ApiError::bad_request)?;
    let height = config
        .check_dimension("height", height)
        .map_err(ApiError::bad_request)?;

    let presentation = match q.presentation.as_deref() {
        Some(p) if !p.trim().is_empty() => p.parse().map_err(ApiError::bad_request)?,
        _ => Presentation::Export,
    };
    let format = match q.format.as_deref() {
        Some(f) if !f.trim().is_empty() => f.parse().map_err(ApiError::bad_request)?,
        _ => OutputFormat::Png,
    };

    let palette = ColorPalette::for_dark(flag(q.dark.as_deref())).with_overrides(
        q.lived_color.as_deref(),
        q.remaining_color.as_deref(),
        q.background_color.as_deref(),
    );

    let week = parse_count("week", q.week.as_deref(), || WEEK_OUT_OF_RANGE.to_owned())?;
    let selected = match week {
        Some(n) => Some(
            WeekCell::from_week_number(n)
                .ok_or_else(|| ApiError::bad_request(WEEK_OUT_OF_RANGE))?,
        ),
        None => {
            let x = parse_number::<f64>("x", q.x.as_deref())?;
            let y = parse_number::<f64>("y", q.y.as_deref())?;
            match (x, y) {
                (Some(x), Some(y)) => GridLayout::for_presentation(
                    f64::from(width),
                    f64::from(height),
                    presentation,
                )
                .cell_at(Point::new(x, y)),
                _ => None,
            }
        }
    };

    Ok(ImageJob {
        birth,
        stats: LifeStats::at(birth.date(), today),
        format,
        options: SceneOptions {
            width,
            height,
            presentation,
            palette,
            fade: flag(q.fade.as_deref()),
            selected,
            labels: true,
        },
    })
}

/// `GET /api/image`
pub async fn image(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> ApiResult<Response> {
    let job = resolve_image_query(&query, &state.config, state.clock.today())?;
    tracing::info!(
        birth = %job.birth,
        width = job.options.width,
        height = job.options.height,
        format = job.format.extension(),
        "rendering image"
    );

    let filename = job.filename();
    let format = job.format;
    let body = match format {
        OutputFormat::Svg => {
            let scene = Scene::build(&job.stats, job.birth.date(), &job.options);
            render_svg(&scene).into_bytes()
        }
        OutputFormat::Png => tokio::task::spawn_blocking(move || {
            let scene = Scene::build(&job.stats, job.birth.date(), &job.options);
            let frame = render_frame(&scene)?;
            encode_png(&frame)
        })
        .await
        .map_err(|e| ApiError::internal(format!("render task failed: {e}")))??,
    };

    Ok((
        [
            (header::CONTENT_TYPE, format.content_type().to_owned()),
            (
                header::CONTENT_DISPOSITION,
                format!("inline; filename={filename}"),
            ),
            (header::CACHE_CONTROL, "public, max-age=3600".to_owned()),
        ],
        body,
    )
        .into_response())
}

#[derive(Debug, Default, Deserialize)]
pub struct StatsQuery {
    #[serde(rename = "birthDate", alias = "birth_date")]
    pub birth_date: Option<String>,
}

/// `GET /api/stats`
pub async fn stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> ApiResult<Json<StatsReport>> {
    let today = state.clock.today();
    let birth = BirthDate::parse(query.birth_date.as_deref(), today)?;
    Ok(Json(StatsReport::new(birth.date(), today)))
}

/// `GET /api/devices`
pub async fn devices() -> Json<&'static [DevicePreset]> {
    Json(DEVICE_PRESETS)
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[cfg(test)]
#[path = "../../tests/unit/server/api.rs"]
mod tests;
