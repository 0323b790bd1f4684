use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn view(q: PageQuery, prefers_dark: bool) -> PageView {
    PageView::from_query(&q, "http://localhost:8080".into(), today(), prefers_dark)
}

fn with_birth(birth: &str) -> PageQuery {
    PageQuery {
        birth_date: Some(birth.into()),
        ..PageQuery::default()
    }
}

#[test]
fn entry_form_without_birth_date() {
    let v = view(PageQuery::default(), false);
    assert!(v.birth.is_none());
    assert!(v.notice.is_none());
    let html = render_page(&v);
    assert!(html.contains(r#"<input type="date""#));
    assert!(html.contains(r#"max="2024-06-15""#));
    assert!(html.contains(r#"min="1934-06-15""#));
}

#[test]
fn invalid_birth_date_falls_back_to_form_with_notice() {
    let v = view(with_birth("2030-01-01"), false);
    assert!(v.birth.is_none());
    assert_eq!(v.notice.as_deref(), Some("Birth date must be in the past"));
    let html = render_page(&v);
    assert!(html.contains("Birth date must be in the past"));
    assert!(html.contains(r#"<input type="date""#));
}

#[test]
fn notice_reports_each_rejection_reason() {
    assert_eq!(
        view(with_birth("15/06/1990"), false).notice.as_deref(),
        Some("Invalid date format. Use YYYY-MM-DD")
    );
    assert_eq!(
        view(with_birth("1920-01-01"), false).notice.as_deref(),
        Some("Birth date cannot be more than 90 years ago")
    );
    assert_eq!(view(with_birth("   "), false).notice, None);
}

#[test]
fn grid_view_shows_stats_and_share_links() {
    let html = render_page(&view(with_birth("1990-06-15"), false));
    assert!(html.contains("Born June 15, 1990 &#183; 1,768 of 4,680 weeks"));
    assert!(html.contains("37.78%"));
    assert!(html.contains(r#"<input type="image" name="pt""#));
    assert!(html.contains("http://localhost:8080?birthDate=1990-06-15"));
    assert!(html.contains(
        "http://localhost:8080/api/image?birthDate=1990-06-15&amp;width=1170&amp;height=2532"
    ));
    assert!(html.contains("device=iPhone%2015%20Pro"));
}

#[test]
fn pointer_coordinates_select_a_week() {
    let layout = GridLayout::for_presentation(
        f64::from(PAGE_GRID_WIDTH),
        f64::from(PAGE_GRID_HEIGHT),
        Presentation::Canvas,
    );
    let p = layout.cell_rect(WeekCell::new(34, 0).unwrap()).center();
    let q = PageQuery {
        pt_x: Some(format!("{}", p.x.round())),
        pt_y: Some(format!("{}", p.y.round())),
        ..with_birth("1990-06-15")
    };
    let v = view(q, false);
    assert_eq!(v.selected, WeekCell::new(34, 0));
    let html = render_page(&v);
    assert!(html.contains("Year 35, Week 1 \u{2022} Now"));
    assert!(html.contains("week=1768"));
}

#[test]
fn system_theme_follows_client_hint() {
    let dark = view(with_birth("1990-06-15"), true);
    assert!(dark.theme.is_dark());
    let dark_bg = format!(
        "background: {}",
        crate::palette::theme::ColorPalette::DARK.background
    );
    assert!(render_page(&dark).contains(&dark_bg));

    let forced = view(
        PageQuery {
            theme: Some("light".into()),
            ..with_birth("1990-06-15")
        },
        true,
    );
    assert!(!forced.theme.is_dark());
}

#[test]
fn client_hint_header_parsing() {
    let mut h = HeaderMap::new();
    assert!(!prefers_dark(&h));
    h.insert(COLOR_SCHEME_HINT, HeaderValue::from_static("\"dark\""));
    assert!(prefers_dark(&h));
    h.insert(COLOR_SCHEME_HINT, HeaderValue::from_static("light"));
    assert!(!prefers_dark(&h));
}

#[test]
fn query_values_are_percent_encoded() {
    assert_eq!(encode_query_value("iPhone SE (3rd gen)"), "iPhone%20SE%20%283rd%20gen%29");
    assert_eq!(encode_query_value("a-b_c.d~"), "a-b_c.d~");
    assert_eq!(encode_query_value("Pixel 9 Pro XL/Fold"), "Pixel%209%20Pro%20XL%2FFold");
    assert_eq!(encode_query_value("caf\u{e9}&x=1"), "caf%C3%A9%26x%3D1");
}
