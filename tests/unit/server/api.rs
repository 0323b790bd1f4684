use super::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn query(birth: &str) -> ImageQuery {
    ImageQuery {
        birth_date: Some(birth.to_owned()),
        ..ImageQuery::default()
    }
}

#[test]
fn defaults_to_phone_png_export() {
    let job = resolve_image_query(&query("1990-06-15"), &ServerConfig::default(), today()).unwrap();
    assert_eq!((job.options.width, job.options.height), (1170, 2532));
    assert_eq!(job.options.presentation, Presentation::Export);
    assert_eq!(job.format, OutputFormat::Png);
    assert_eq!(job.options.palette, ColorPalette::LIGHT);
    assert_eq!(job.stats.weeks_lived, 1768);
    assert_eq!(job.filename(), "life-in-weeks-1990-06-15.png");
}

#[test]
fn birth_date_errors_pass_through() {
    let cfg = ServerConfig::default();
    let err = resolve_image_query(&ImageQuery::default(), &cfg, today()).unwrap_err();
    assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(
        err.message(),
        "birthDate parameter is required (format: YYYY-MM-DD)"
    );

    let err = resolve_image_query(&query("2030-01-01"), &cfg, today()).unwrap_err();
    assert_eq!(err.message(), "Birth date must be in the past");
}

#[test]
fn size_bounds_come_from_config() {
    let q = ImageQuery {
        width: Some("20000".into()),
        ..query("1990-06-15")
    };
    let err = resolve_image_query(&q, &ServerConfig::default(), today()).unwrap_err();
    assert!(err.message().contains("width"));

    let q = ImageQuery {
        height: Some("tall".into()),
        ..query("1990-06-15")
    };
    let err = resolve_image_query(&q, &ServerConfig::default(), today()).unwrap_err();
    assert_eq!(err.message(), "height must be a number");
}

#[test]
fn oversized_integers_are_out_of_range_not_malformed() {
    let cfg = ServerConfig::default();
    let q = ImageQuery {
        width: Some("99999999999".into()),
        ..query("1990-06-15")
    };
    let err = resolve_image_query(&q, &cfg, today()).unwrap_err();
    assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(err.message(), "width must be between 64 and 8192 pixels");

    let q = ImageQuery {
        height: Some("-1".into()),
        ..query("1990-06-15")
    };
    let err = resolve_image_query(&q, &cfg, today()).unwrap_err();
    assert_eq!(err.message(), "height must be between 64 and 8192 pixels");

    let q = ImageQuery {
        week: Some("4294967296".into()),
        ..query("1990-06-15")
    };
    let err = resolve_image_query(&q, &cfg, today()).unwrap_err();
    assert_eq!(err.message(), "week must be between 0 and 4679");

    let q = ImageQuery {
        width: Some("12.5".into()),
        ..query("1990-06-15")
    };
    let err = resolve_image_query(&q, &cfg, today()).unwrap_err();
    assert_eq!(err.message(), "width must be a number");
}

#[test]
fn device_overrides_explicit_size() {
    let q = ImageQuery {
        device: Some("iPhone SE (3rd gen)".into()),
        width: Some("2000".into()),
        ..query("1990-06-15")
    };
    let job = resolve_image_query(&q, &ServerConfig::default(), today()).unwrap();
    assert_eq!((job.options.width, job.options.height), (750, 1334));

    let q = ImageQuery {
        device: Some("Nokia 3310".into()),
        ..query("1990-06-15")
    };
    assert!(resolve_image_query(&q, &ServerConfig::default(), today()).is_err());
}

#[test]
fn flags_accept_empty_true_and_one() {
    assert!(flag(Some("")));
    assert!(flag(Some("true")));
    assert!(flag(Some("1")));
    assert!(!flag(Some("false")));
    assert!(!flag(Some("0")));
    assert!(!flag(None));
}

#[test]
fn dark_and_color_overrides() {
    let q = ImageQuery {
        dark: Some(String::new()),
        lived_color: Some("#2563EB".into()),
        background_color: Some("bogus".into()),
        ..query("1990-06-15")
    };
    let job = resolve_image_query(&q, &ServerConfig::default(), today()).unwrap();
    let p = job.options.palette;
    assert_eq!(p.remaining, ColorPalette::DARK.remaining);
    assert_eq!(p.lived.to_hex(), "#2563eb");
    assert_eq!(p.background.to_hex(), "#000000");
}

#[test]
fn selection_by_week_or_pointer() {
    let q = ImageQuery {
        week: Some("1768".into()),
        ..query("1990-06-15")
    };
    let job = resolve_image_query(&q, &ServerConfig::default(), today()).unwrap();
    assert_eq!(job.options.selected, WeekCell::new(34, 0));

    let layout = GridLayout::for_presentation(1170.0, 2532.0, Presentation::Export);
    let centre = layout.cell_rect(WeekCell::new(2, 5).unwrap()).center();
    let q = ImageQuery {
        x: Some(centre.x.to_string()),
        y: Some(centre.y.to_string()),
        ..query("1990-06-15")
    };
    let job = resolve_image_query(&q, &ServerConfig::default(), today()).unwrap();
    assert_eq!(job.options.selected, WeekCell::new(2, 5));

    let q = ImageQuery {
        week: Some("4680".into()),
        ..query("1990-06-15")
    };
    assert!(resolve_image_query(&q, &ServerConfig::default(), today()).is_err());
}

#[test]
fn format_and_presentation_are_validated() {
    let q = ImageQuery {
        format: Some("SVG".into()),
        presentation: Some("canvas".into()),
        ..query("1990-06-15")
    };
    let job = resolve_image_query(&q, &ServerConfig::default(), today()).unwrap();
    assert_eq!(job.format, OutputFormat::Svg);
    assert_eq!(job.filename(), "life-in-weeks-1990-06-15.svg");
    assert_eq!(job.options.presentation, Presentation::Canvas);

    let q = ImageQuery {
        format: Some("gif".into()),
        ..query("1990-06-15")
    };
    assert!(resolve_image_query(&q, &ServerConfig::default(), today()).is_err());
}
