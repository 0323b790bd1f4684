use super::*;

fn birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(1990, 6, 15).unwrap()
}

fn stats() -> LifeStats {
    LifeStats::at(birth(), NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
}

fn opts(presentation: Presentation) -> SceneOptions {
    SceneOptions {
        width: 1040,
        height: 1600,
        presentation,
        ..SceneOptions::default()
    }
}

#[test]
fn one_paint_per_week() {
    let scene = Scene::build(&stats(), birth(), &opts(Presentation::Canvas));
    assert_eq!(scene.cells.len(), TOTAL_WEEKS as usize);
    assert_eq!(scene.background, ColorPalette::LIGHT.background);

    let current = &scene.cells[1768];
    assert_eq!(current.state, WeekState::Current);
    assert_eq!(current.color, ColorPalette::LIGHT.current);
    assert_eq!(scene.cells[0].color, ColorPalette::LIGHT.lived);
    assert_eq!(scene.cells[4679].color, ColorPalette::LIGHT.remaining);
}

#[test]
fn canvas_labels_match_the_page_header() {
    let scene = Scene::build(&stats(), birth(), &opts(Presentation::Canvas));
    assert_eq!(scene.labels[0].text, "YOUR LIFE IN WEEKS");
    assert_eq!(scene.labels[0].weight, 600);
    assert_eq!(
        scene.labels[1].text,
        "Born June 15, 1990 \u{b7} 1,768 of 4,680 weeks"
    );

    let markers: Vec<_> = scene
        .labels
        .iter()
        .filter(|l| l.anchor == TextAnchor::End)
        .map(|l| l.text.as_str())
        .collect();
    assert_eq!(
        markers,
        ["0", "10", "20", "30", "40", "50", "60", "70", "80", "90"]
    );
    let ninety = scene.labels.last().unwrap();
    assert_eq!(ninety.y, scene.layout.start_y + scene.layout.grid_height);
    assert_eq!(ninety.x, scene.layout.start_x - 8.0);
}

#[test]
fn fullscreen_has_only_markers_and_labels_can_be_disabled() {
    let scene = Scene::build(&stats(), birth(), &opts(Presentation::Fullscreen));
    assert_eq!(scene.labels.len(), 10);

    let bare = Scene::build(
        &stats(),
        birth(),
        &SceneOptions {
            labels: false,
            ..opts(Presentation::Canvas)
        },
    );
    assert!(bare.labels.is_empty());
}

#[test]
fn export_subtitle_sits_below_the_grid() {
    let scene = Scene::build(&stats(), birth(), &opts(Presentation::Export));
    let sub = scene
        .labels
        .iter()
        .find(|l| l.text.starts_with("Born"))
        .unwrap();
    assert!(sub.y > scene.layout.start_y + scene.layout.grid_height);
    assert!(sub.y < f64::from(scene.height));
}

#[test]
fn fade_only_touches_old_lived_weeks() {
    let faded = Scene::build(
        &stats(),
        birth(),
        &SceneOptions {
            fade: true,
            ..opts(Presentation::Canvas)
        },
    );
    let p = ColorPalette::LIGHT;
    assert_ne!(faded.cells[0].color, p.lived);
    assert_eq!(faded.cells[1767].color, p.lived);
    assert_eq!(faded.cells[1768].color, p.current);
    assert_eq!(faded.cells[2000].color, p.remaining);
}

#[test]
fn selected_week_uses_hover_colors() {
    let cell = WeekCell::new(1, 1).unwrap();
    let scene = Scene::build(
        &stats(),
        birth(),
        &SceneOptions {
            selected: Some(cell),
            fade: true,
            ..opts(Presentation::Canvas)
        },
    );
    assert_eq!(
        scene.cells[cell.week_number() as usize].color,
        ColorPalette::LIGHT.hovered_lived
    );
}

#[test]
fn captions_are_one_based() {
    assert_eq!(
        describe_cell(WeekCell::new(0, 0).unwrap(), 1768),
        "Year 1, Week 1 \u{2022} Lived"
    );
    assert_eq!(
        describe_cell(WeekCell::new(34, 0).unwrap(), 1768),
        "Year 35, Week 1 \u{2022} Now"
    );
    assert_eq!(
        describe_cell(WeekCell::new(89, 51).unwrap(), 1768),
        "Year 90, Week 52 \u{2022} Ahead"
    );
}
