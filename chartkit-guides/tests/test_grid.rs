use chartkit_guides::grid::{make_grid_marks, GridAxis};
use chartkit_guides::opts::GridConfig;
use chartkit_scales::linear::LinearScale;
use chartkit_scenegraph::marks::mark::SceneMark;
use float_cmp::assert_approx_eq;

#[test]
fn test_horizontal_gridlines_span_width() {
    let scale = LinearScale::new((0.0, 200.0), (360.0, 40.0));
    let ticks = [0.0, 100.0, 200.0];
    let group = make_grid_marks(
        None,
        Some(GridAxis {
            scale: &scale,
            ticks: &ticks,
        }),
        500.0,
        400.0,
        &GridConfig::default(),
    );

    assert_eq!(group.name, "grid");
    assert_eq!(group.marks.len(), 1);
    let SceneMark::Rule(rule) = &group.marks[0] else {
        panic!("expected rule mark");
    };
    assert_eq!(rule.len, 3);
    assert_eq!(rule.y_vec(), vec![360.0, 200.0, 40.0]);
    assert_eq!(rule.x2.get(0), Some(&500.0));
    assert_eq!(rule.stroke_dash, Some(vec![4.0, 2.0]));
}

#[test]
fn test_vertical_gridlines_span_height() {
    let scale = LinearScale::new((0.0, 10.0), (60.0, 460.0));
    let ticks = [0.0, 5.0, 10.0];
    let group = make_grid_marks(
        Some(GridAxis {
            scale: &scale,
            ticks: &ticks,
        }),
        None,
        500.0,
        300.0,
        &GridConfig::default(),
    );

    let SceneMark::Rule(rule) = &group.marks[0] else {
        panic!("expected rule mark");
    };
    let xs = rule.x_vec();
    assert_approx_eq!(f32, xs[1], 260.0);
    assert_eq!(rule.y2.get(2), Some(&300.0));
}

#[test]
fn test_no_ticks_no_lines() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
    let group = make_grid_marks(
        Some(GridAxis {
            scale: &scale,
            ticks: &[],
        }),
        None,
        100.0,
        100.0,
        &GridConfig::default(),
    );
    assert!(group.is_empty());
}
