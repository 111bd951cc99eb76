// Scenario property tests
// Run: cargo test --test scenarios
//
// Every scenario is rendered in memory; nothing is written to disk here.
// tests/written_fixtures.rs covers the encoded files.

use std::collections::HashSet;

use two_up_fixtures::{catalog, Canvas, Fill, Rgb, Scenario};

fn find(name: &str) -> Scenario {
    catalog()
        .into_iter()
        .find(|s| s.name == name)
        .expect("scenario missing from catalog")
}

/// Positions of the diff painted in the highlight color
fn highlighted(diff: &Canvas, highlight: Rgb) -> HashSet<(i64, i64)> {
    let mut out = HashSet::new();
    for y in 0..i64::from(diff.height()) {
        for x in 0..i64::from(diff.width()) {
            if diff.pixel(x, y) == Some(highlight) {
                out.insert((x, y));
            }
        }
    }
    out
}

fn is_solid(canvas: &Canvas, color: Rgb) -> bool {
    canvas.as_bytes().chunks(3).all(|px| px == color.to_array())
}

// ============================================================================
// (a) DIMENSIONS AND COLORS
// ============================================================================

#[test]
fn expected_and_actual_match_declared_layers() {
    for scenario in catalog() {
        let rendered = scenario.render(Rgb::HOT_PINK);
        assert_eq!(
            rendered.expected.dimensions(),
            (scenario.expected.width, scenario.expected.height),
            "{}",
            scenario.name
        );
        assert_eq!(
            rendered.actual.dimensions(),
            (scenario.actual.width, scenario.actual.height),
            "{}",
            scenario.name
        );
        if let Fill::Solid(color) = scenario.expected.fill {
            assert!(is_solid(&rendered.expected, color), "{}", scenario.name);
        }
    }
}

#[test]
fn documented_dimensions() {
    let dims: Vec<_> = catalog()
        .iter()
        .map(|s| {
            (
                s.name,
                (s.expected.width, s.expected.height),
                (s.actual.width, s.actual.height),
            )
        })
        .collect();
    assert_eq!(
        dims,
        vec![
            ("standard", (1920, 1080), (1920, 1080)),
            ("mismatched", (1000, 200), (200, 900)),
            ("portrait", (600, 1200), (600, 1200)),
            ("landscape", (1600, 400), (1600, 400)),
            ("detailed", (800, 600), (800, 600)),
            ("small-diff", (1000, 1000), (1000, 1000)),
            ("large-diff", (800, 800), (800, 800)),
            ("button", (120, 40), (120, 40)),
        ]
    );
}

#[test]
fn standard_actual_has_red_square() {
    let rendered = find("standard").render(Rgb::HOT_PINK);
    assert_eq!(rendered.expected.pixel(1820, 50), Some(Rgb(70, 130, 180)));
    assert_eq!(rendered.actual.pixel(1820, 50), Some(Rgb::RED));
    assert_eq!(rendered.actual.pixel(1870, 100), Some(Rgb::RED));
    assert_eq!(rendered.actual.pixel(1871, 100), Some(Rgb(70, 130, 180)));
}

#[test]
fn portrait_actual_has_yellow_circle() {
    let rendered = find("portrait").render(Rgb::HOT_PINK);
    assert_eq!(rendered.actual.pixel(100, 1100), Some(Rgb::YELLOW));
    assert_eq!(rendered.actual.pixel(71, 1100), Some(Rgb::YELLOW));
    assert_eq!(rendered.actual.pixel(71, 1071), Some(Rgb(128, 0, 128)));
}

#[test]
fn landscape_actual_has_magenta_triangle() {
    let rendered = find("landscape").render(Rgb::HOT_PINK);
    let actual = &rendered.actual;
    assert_eq!(actual.pixel(1200, 200), Some(Rgb::MAGENTA));
    // Apex and both base corners are drawn, like the square's inclusive box
    assert_eq!(actual.pixel(1200, 160), Some(Rgb::MAGENTA));
    assert_eq!(actual.pixel(1160, 240), Some(Rgb::MAGENTA));
    assert_eq!(actual.pixel(1240, 240), Some(Rgb::MAGENTA));
    assert_eq!(actual.pixel(1200, 159), Some(Rgb(0, 128, 128)));

    let base = (0..1600)
        .filter(|&x| actual.pixel(x, 240) == Some(Rgb::MAGENTA))
        .count();
    assert_eq!(base, 81);

    for y in 0..400 {
        for x in 0..1600 {
            if actual.pixel(x, y) == Some(Rgb::MAGENTA) {
                assert!((1160..=1240).contains(&x) && (160..=240).contains(&y));
            }
        }
    }
}

#[test]
fn detailed_uses_checkerboard_with_blue_square() {
    let rendered = find("detailed").render(Rgb::HOT_PINK);
    assert_eq!(rendered.expected.pixel(0, 0), Some(Rgb::BLACK));
    assert_eq!(rendered.expected.pixel(10, 0), Some(Rgb::WHITE));
    assert_eq!(rendered.expected.pixel(10, 10), Some(Rgb::BLACK));
    assert_eq!(rendered.actual.pixel(15, 15), Some(Rgb::BLUE));
    assert_eq!(rendered.actual.pixel(20, 20), Some(Rgb::BLUE));
    assert_eq!(rendered.actual.pixel(21, 21), Some(Rgb::BLACK));
}

#[test]
fn small_diff_actual_has_five_red_pixels() {
    let rendered = find("small-diff").render(Rgb::HOT_PINK);
    let red = rendered
        .actual
        .as_bytes()
        .chunks(3)
        .filter(|px| *px == Rgb::RED.to_array())
        .count();
    assert_eq!(red, 5);
    assert_eq!(rendered.actual.pixel(500, 500), Some(Rgb::RED));
}

#[test]
fn large_diff_is_a_full_color_swap() {
    let rendered = find("large-diff").render(Rgb::HOT_PINK);
    assert!(is_solid(&rendered.expected, Rgb::RED));
    assert!(is_solid(&rendered.actual, Rgb::BLUE));
    assert!(is_solid(&rendered.diff, Rgb::HOT_PINK));
}

// ============================================================================
// (b) DIFF SIZE IS THE ELEMENT-WISE MAX
// ============================================================================

#[test]
fn diff_sized_to_max_of_inputs() {
    for scenario in catalog() {
        let rendered = scenario.render(Rgb::HOT_PINK);
        let width = rendered.expected.width().max(rendered.actual.width());
        let height = rendered.expected.height().max(rendered.actual.height());
        assert_eq!(rendered.diff.dimensions(), (width, height), "{}", scenario.name);
    }
}

// ============================================================================
// (c) HIGHLIGHTED POSITIONS EQUAL THE DISCREPANCY REGION
// ============================================================================

#[test]
fn highlighted_positions_equal_region() {
    // None of the backgrounds or marks use the highlight color, so every
    // highlighted pixel came from the region.
    for scenario in catalog() {
        let rendered = scenario.render(Rgb::HOT_PINK);
        let (w, h) = rendered.diff.dimensions();
        let expected: HashSet<(i64, i64)> = scenario
            .highlight
            .positions(w, h)
            .into_iter()
            .filter(|&(x, y)| rendered.diff.contains(x, y))
            .collect();
        assert_eq!(
            highlighted(&rendered.diff, Rgb::HOT_PINK),
            expected,
            "{}",
            scenario.name
        );
    }
}

#[test]
fn diff_outside_region_shows_expected_for_same_size() {
    for scenario in catalog() {
        if scenario.expected.width != scenario.actual.width
            || scenario.expected.height != scenario.actual.height
        {
            continue;
        }
        let rendered = scenario.render(Rgb::HOT_PINK);
        let region: HashSet<_> = scenario
            .highlight
            .positions(scenario.expected.width, scenario.expected.height)
            .into_iter()
            .collect();

        let (w, h) = rendered.diff.dimensions();
        for y in 0..i64::from(h) {
            for x in 0..i64::from(w) {
                if !region.contains(&(x, y)) {
                    assert_eq!(
                        rendered.diff.pixel(x, y),
                        rendered.expected.pixel(x, y),
                        "{} at ({x}, {y})",
                        scenario.name
                    );
                }
            }
        }
    }
}
