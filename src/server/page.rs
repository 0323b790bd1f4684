use std::fmt::Write as _;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, HeaderValue, header},
    response::{Html, IntoResponse, Response},
};
use chrono::{Months, NaiveDate};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;

use crate::dates::birth::{BirthDate, ValidationResult};
use crate::dates::stats::LifeStats;
use crate::foundation::core::{Point, TOTAL_WEEKS};
use crate::foundation::format::{escape_markup, group_thousands, long_date};
use crate::layout::devices::DEVICE_PRESETS;
use crate::layout::grid::{GridLayout, Presentation, WeekCell};
use crate::palette::theme::{Theme, ThemeContext};
use crate::render::scene::describe_cell;
use crate::server::api::{DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, flag};
use crate::server::state::AppState;

/// Size of the grid image embedded in the page. It is shown unscaled so click coordinates map
/// straight onto the layout.
pub const PAGE_GRID_WIDTH: u32 = 1040;
pub const PAGE_GRID_HEIGHT: u32 = 1600;

const COLOR_SCHEME_HINT: &str = "sec-ch-prefers-color-scheme";

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(rename = "birthDate", alias = "birth_date")]
    pub birth_date: Option<String>,
    pub theme: Option<String>,
    pub fade: Option<String>,
    pub week: Option<String>,
    #[serde(rename = "pt.x")]
    pub pt_x: Option<String>,
    #[serde(rename = "pt.y")]
    pub pt_y: Option<String>,
}

/// Everything the page template needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub origin: String,
    pub today: NaiveDate,
    pub theme: ThemeContext,
    pub fade: bool,
    pub birth: Option<BirthDate>,
    /// Why a supplied birth date was ignored.
    pub notice: Option<String>,
    pub selected: Option<WeekCell>,
}

impl PageView {
    pub fn from_query(q: &PageQuery, origin: String, today: NaiveDate, prefers_dark: bool) -> Self {
        let theme = q
            .theme
            .as_deref()
            .and_then(|t| t.parse::<Theme>().ok())
            .unwrap_or_default();

        let supplied = q.birth_date.as_deref().is_some_and(|s| !s.trim().is_empty());
        let parsed = BirthDate::parse(q.birth_date.as_deref(), today);
        let birth = parsed.ok();
        let notice = if supplied {
            ValidationResult::from(parsed.map(|_| ())).error
        } else {
            None
        };

        let selected = birth.and_then(|_| selected_cell(q));

        Self {
            origin,
            today,
            theme: ThemeContext::new(theme, prefers_dark),
            fade: flag(q.fade.as_deref()),
            birth,
            notice,
            selected,
        }
    }
}

fn selected_cell(q: &PageQuery) -> Option<WeekCell> {
    if let Some(n) = q.week.as_deref().and_then(|w| w.trim().parse::<u32>().ok()) {
        return WeekCell::from_week_number(n);
    }
    let x = q.pt_x.as_deref()?.trim().parse::<f64>().ok()?;
    let y = q.pt_y.as_deref()?.trim().parse::<f64>().ok()?;
    GridLayout::for_presentation(
        f64::from(PAGE_GRID_WIDTH),
        f64::from(PAGE_GRID_HEIGHT),
        Presentation::Canvas,
    )
    .cell_at(Point::new(x, y))
}

/// Read the `Sec-CH-Prefers-Color-Scheme` client hint.
pub fn prefers_dark(headers: &HeaderMap) -> bool {
    headers
        .get(COLOR_SCHEME_HINT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim().trim_matches('"').eq_ignore_ascii_case("dark"))
}

/// `GET /`
pub async fn index(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    let host = headers.get(header::HOST).and_then(|h| h.to_str().ok());
    let view = PageView::from_query(
        &query,
        state.config.origin_for(host),
        state.clock.today(),
        prefers_dark(&headers),
    );
    if let Some(notice) = &view.notice {
        tracing::warn!(notice = %notice, "ignoring birth date on page request");
    }

    let mut response = Html(render_page(&view)).into_response();
    let h = response.headers_mut();
    h.insert("accept-ch", HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"));
    h.insert(header::VARY, HeaderValue::from_static("Sec-CH-Prefers-Color-Scheme"));
    response
}

/// RFC 3986 unreserved characters pass through; everything else is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub(crate) fn encode_query_value(s: &str) -> String {
    utf8_percent_encode(s, QUERY_VALUE).to_string()
}

fn page_href(view: &PageView, theme: Theme, fade: bool, week: Option<WeekCell>) -> String {
    let mut href = format!("/?theme={theme}");
    if let Some(b) = view.birth {
        let _ = write!(href, "&birthDate={b}");
    }
    if fade {
        href.push_str("&fade=1");
    }
    if let Some(c) = week {
        let _ = write!(href, "&week={}", c.week_number());
    }
    href
}

fn image_src(view: &PageView, birth: BirthDate) -> String {
    let mut src = format!(
        "/api/image?birthDate={birth}&presentation=canvas&width={PAGE_GRID_WIDTH}&height={PAGE_GRID_HEIGHT}"
    );
    if view.theme.is_dark() {
        src.push_str("&dark=1");
    }
    if view.fade {
        src.push_str("&fade=1");
    }
    if let Some(c) = view.selected {
        let _ = write!(src, "&week={}", c.week_number());
    }
    src
}

fn wallpaper_href(view: &PageView, birth: BirthDate, sizing: &str) -> String {
    let mut href = format!("/api/image?birthDate={birth}&{sizing}");
    if view.theme.is_dark() {
        href.push_str("&dark=1");
    }
    href
}

/// Render the full HTML document.
pub fn render_page(view: &PageView) -> String {
    let palette = view.theme.palette();
    let mut out = String::with_capacity(8 * 1024);

    let _ = write!(
        out,
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Your Life in Weeks</title>
<style>
body {{ margin: 0; padding: 2rem; background: {bg}; color: {fg}; font-family: Georgia, serif; }}
a {{ color: {accent}; }}
.muted {{ color: {muted}; }}
.secondary {{ color: {secondary}; }}
.mono {{ font-family: ui-monospace, 'DejaVu Sans Mono', monospace; }}
.grid {{ overflow: auto; border: 1px solid {border}; display: inline-block; }}
.grid input {{ display: block; max-width: none; }}
dl {{ display: grid; grid-template-columns: max-content max-content; gap: .25rem 1rem; }}
dt {{ color: {secondary}; }}
.notice {{ color: {accent}; }}
</style>
</head>
<body>
<header>
<h1>YOUR LIFE IN WEEKS</h1>
<nav class="mono"><a href="{toggle}">{toggle_label}</a></nav>
</header>
"#,
        bg = palette.background,
        fg = palette.text_primary,
        accent = palette.current,
        muted = palette.text_muted,
        secondary = palette.text_secondary,
        border = palette.border,
        toggle = escape_markup(&page_href(view, view.theme.toggled().theme, view.fade, view.selected)),
        toggle_label = if view.theme.is_dark() {
            "Light mode"
        } else {
            "Dark mode"
        },
    );

    match view.birth {
        Some(birth) => write_grid_view(&mut out, view, birth),
        None => write_entry_form(&mut out, view),
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn write_entry_form(out: &mut String, view: &PageView) {
    let min = view
        .today
        .checked_sub_months(Months::new(90 * 12))
        .unwrap_or(view.today);
    out.push_str(
        "<main>\n<p class=\"secondary\">Each box is one week of a 90-year life. \
         Enter your birth date to see how many you have lived.</p>\n",
    );
    if let Some(notice) = &view.notice {
        let _ = writeln!(out, r#"<p class="notice" role="alert">{}</p>"#, escape_markup(notice));
    }
    let _ = write!(
        out,
        r#"<form method="get" action="/">
<label for="birthDate">Birth date</label>
<input type="date" id="birthDate" name="birthDate" min="{min}" max="{max}" required>
<input type="hidden" name="theme" value="{theme}">
<button type="submit">Show my weeks</button>
</form>
</main>
"#,
        min = min.format("%Y-%m-%d"),
        max = view.today.format("%Y-%m-%d"),
        theme = view.theme.theme,
    );
}

fn write_grid_view(out: &mut String, view: &PageView, birth: BirthDate) {
    let stats = LifeStats::at(birth.date(), view.today);

    let _ = write!(
        out,
        r#"<main>
<p class="secondary mono">Born {born} &#183; {lived} of {total} weeks</p>
<dl class="mono">
<dt>Weeks lived</dt><dd>{lived}</dd>
<dt>Weeks remaining</dt><dd>{remaining}</dd>
<dt>Life lived</dt><dd>{percent:.2}%</dd>
<dt>Years lived</dt><dd>{years:.2}</dd>
<dt>Days lived</dt><dd>{days}</dd>
<dt>Days remaining</dt><dd>{days_left}</dd>
</dl>
"#,
        born = escape_markup(&long_date(birth.date())),
        lived = group_thousands(u64::from(stats.weeks_lived)),
        total = group_thousands(u64::from(TOTAL_WEEKS)),
        remaining = group_thousands(u64::from(stats.weeks_remaining)),
        percent = stats.percentage_lived,
        years = stats.years_lived,
        days = group_thousands(stats.days_lived.max(0).unsigned_abs()),
        days_left = group_thousands(stats.days_remaining.max(0).unsigned_abs()),
    );

    let caption = match view.selected {
        Some(cell) => describe_cell(cell, stats.weeks_lived),
        None => "Click a week to inspect it.".to_owned(),
    };
    let _ = write!(
        out,
        r#"<p class="mono" aria-live="polite">{caption}</p>
<form method="get" action="/" class="grid">
<input type="hidden" name="birthDate" value="{birth}">
<input type="hidden" name="theme" value="{theme}">
{fade_field}<input type="image" name="pt" src="{src}" width="{w}" height="{h}" alt="Grid of 4,680 weeks, {lived} lived">
</form>
<p class="mono">
<a href="{fade_href}">{fade_label}</a> &#183;
<a href="{download}" download="life-in-weeks-{birth}.png">Download PNG</a> &#183;
<a href="{svg}">Open SVG</a> &#183;
<a href="/?theme={theme}">Change birth date</a>
</p>
"#,
        caption = escape_markup(&caption),
        theme = view.theme.theme,
        fade_field = if view.fade {
            "<input type=\"hidden\" name=\"fade\" value=\"1\">\n"
        } else {
            ""
        },
        src = escape_markup(&image_src(view, birth)),
        w = PAGE_GRID_WIDTH,
        h = PAGE_GRID_HEIGHT,
        lived = group_thousands(u64::from(stats.weeks_lived)),
        fade_href = escape_markup(&page_href(view, view.theme.theme, !view.fade, view.selected)),
        fade_label = if view.fade { "Solid weeks" } else { "Fade older weeks" },
        download = escape_markup(&wallpaper_href(
            view,
            birth,
            &format!("width={DEFAULT_IMAGE_WIDTH}&height={DEFAULT_IMAGE_HEIGHT}")
        )),
        svg = escape_markup(&format!("{}&format=svg", image_src(view, birth))),
    );

    let share_page = format!("{}?birthDate={birth}", view.origin);
    let share_image = format!(
        "{}/api/image?birthDate={birth}&width={DEFAULT_IMAGE_WIDTH}&height={DEFAULT_IMAGE_HEIGHT}",
        view.origin
    );
    let _ = write!(
        out,
        r#"<section>
<h2>Share</h2>
<p class="mono"><a href="{page}">{page}</a></p>
<p class="mono"><a href="{image}">{image}</a></p>
</section>
<section>
<h2>Phone wallpaper</h2>
<p class="secondary">Use one of these as a lock-screen wallpaper; the space above the grid stays clear for the clock.</p>
<ul class="mono">
"#,
        page = escape_markup(&share_page),
        image = escape_markup(&share_image),
    );
    for d in DEVICE_PRESETS {
        let href = wallpaper_href(
            view,
            birth,
            &format!("device={}", encode_query_value(d.name)),
        );
        let _ = writeln!(
            out,
            r#"<li><a href="{}">{}</a> <span class="muted">{}&#215;{}</span></li>"#,
            escape_markup(&href),
            escape_markup(d.name),
            d.width,
            d.height,
        );
    }
    out.push_str("</ul>\n</section>\n</main>\n");
}

#[cfg(test)]
#[path = "../../tests/unit/server/page.rs"]
mod tests;
