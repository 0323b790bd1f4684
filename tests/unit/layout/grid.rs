use super::*;

fn approx(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn reference_phone_layout() {
    let g = GridLayout::compute(1170.0, 2532.0, 0.25);
    let expected = ((1170.0 - 140.4) / 52.0_f64).min((2532.0 - 101.28 - 633.0) / 90.0);
    approx(g.cell_size, expected);
    approx(g.cell_size, 19.8);
    approx(g.box_size, 19.8 * 0.82);
    approx(g.border_radius, 19.8 * 0.82 * 0.15);
    approx(g.start_x, 70.2);
    approx(g.start_y, 633.0);
}

#[test]
fn grid_fits_inside_the_canvas() {
    for (w, h) in [(1170.0, 2532.0), (2532.0, 1170.0), (800.0, 800.0), (64.0, 64.0)] {
        for p in [
            Presentation::Export,
            Presentation::Canvas,
            Presentation::Fullscreen,
        ] {
            let g = GridLayout::for_presentation(w, h, p);
            assert!(g.grid_width <= w + 1e-9);
            assert!(g.grid_height <= h - g.top_space + 1e-9);
            assert!(g.start_x >= 0.0);
            assert!(g.border_radius >= 1.0);
        }
    }
}

#[test]
fn tiny_canvas_keeps_minimum_radius() {
    let g = GridLayout::compute(64.0, 64.0, 0.25);
    assert_eq!(g.border_radius, 1.0);
}

#[test]
fn cell_rect_is_centred_in_its_cell() {
    let g = GridLayout::compute(1170.0, 2532.0, 0.25);
    let r = g.cell_rect(WeekCell::new(2, 3).unwrap());
    let inset = (g.cell_size - g.box_size) / 2.0;
    approx(r.x0, g.start_x + 3.0 * g.cell_size + inset);
    approx(r.y0, g.start_y + 2.0 * g.cell_size + inset);
    approx(r.width(), g.box_size);
}

#[test]
fn hit_testing_round_trips_cell_centres() {
    let g = GridLayout::compute(1040.0, 1600.0, 0.08);
    for cell in [
        WeekCell::new(0, 0).unwrap(),
        WeekCell::new(34, 0).unwrap(),
        WeekCell::new(89, 51).unwrap(),
    ] {
        assert_eq!(g.cell_at(g.cell_rect(cell).center()), Some(cell));
    }
}

#[test]
fn hit_testing_outside_the_grid_misses() {
    let g = GridLayout::compute(1040.0, 1600.0, 0.08);
    let b = g.bounds();
    assert_eq!(g.cell_at(Point::new(b.x0 - 1.0, b.y0 + 1.0)), None);
    assert_eq!(g.cell_at(Point::new(b.x1 + 0.5, b.y0 + 1.0)), None);
    assert_eq!(g.cell_at(Point::new(b.x0 + 1.0, b.y1 + 0.5)), None);
    assert_eq!(g.cell_at(Point::new(b.x0 + 1.0, b.y0 - 0.1)), None);
}

#[test]
fn week_numbers_map_to_rows_and_columns() {
    let c = WeekCell::from_week_number(1768).unwrap();
    assert_eq!((c.year, c.week), (34, 0));
    assert_eq!(c.week_number(), 1768);
    assert!(WeekCell::from_week_number(TOTAL_WEEKS).is_none());
    assert!(WeekCell::new(90, 0).is_none());
    assert!(WeekCell::new(0, 52).is_none());
    assert_eq!(WeekCell::all().count(), TOTAL_WEEKS as usize);
}

#[test]
fn presentation_parses_aliases() {
    assert_eq!("wallpaper".parse::<Presentation>(), Ok(Presentation::Export));
    assert_eq!("Canvas".parse::<Presentation>(), Ok(Presentation::Canvas));
    assert!("poster".parse::<Presentation>().is_err());
    assert_eq!(Presentation::default().top_space_ratio(), 0.25);
}
