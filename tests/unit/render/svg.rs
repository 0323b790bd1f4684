use chrono::NaiveDate;

use super::*;
use crate::dates::stats::LifeStats;
use crate::layout::grid::Presentation;
use crate::render::scene::SceneOptions;

fn scene(presentation: Presentation) -> Scene {
    let birth = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    Scene::build(
        &LifeStats::at(birth, today),
        birth,
        &SceneOptions {
            width: 600,
            height: 900,
            presentation,
            ..SceneOptions::default()
        },
    )
}

#[test]
fn document_has_size_background_and_every_week() {
    let svg = render_svg(&scene(Presentation::Canvas));
    assert!(svg.starts_with("<svg "));
    assert!(svg.contains(r#"width="600" height="900" viewBox="0 0 600 900""#));
    assert!(svg.contains(r##"fill="#faf8f5""##));
    assert_eq!(svg.matches("<title>").count(), 4680);
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn cells_carry_captions() {
    let svg = render_svg(&scene(Presentation::Canvas));
    assert!(svg.contains(r#"data-week="1768""#));
    assert!(svg.contains("<title>Year 35, Week 1 \u{2022} Now</title>"));
}

#[test]
fn labels_are_escaped_text_nodes() {
    let svg = render_svg(&scene(Presentation::Canvas));
    assert!(svg.contains(">YOUR LIFE IN WEEKS</text>"));
    assert!(svg.contains(r#"text-anchor="end""#));
}

#[test]
fn labels_document_contains_only_text() {
    let doc = labels_document(&scene(Presentation::Fullscreen));
    assert_eq!(doc.matches("<text ").count(), 10);
    assert!(!doc.contains("<rect"));
}
