use chartkit_scenegraph::marks::group::SceneGroup;
use chartkit_scenegraph::marks::mark::SceneMark;
use chartkit_scenegraph::marks::rect::SceneRectMark;
use chartkit_scenegraph::marks::rule::SceneRuleMark;
use chartkit_scenegraph::scene_graph::SceneGraph;

fn sample_scene() -> SceneGraph {
    let mut grid = SceneGroup::named("grid");
    grid.push(SceneRuleMark {
        name: "gridlines".to_string(),
        ..Default::default()
    });

    let mut marks = SceneGroup::named("marks");
    let mut nested = SceneGroup::named("bars");
    nested.push(SceneRectMark::default());
    marks.push(nested);

    SceneGraph {
        marks: vec![grid.into(), marks.into()],
        width: 100.0,
        height: 50.0,
        origin: [0.0, 0.0],
    }
}

#[test]
fn test_layer_names_in_paint_order() {
    let scene = sample_scene();
    assert_eq!(scene.layer_names(), vec!["grid", "marks"]);
    assert!(scene.group("marks").is_some());
    assert!(scene.group("axis").is_none());
}

#[test]
fn test_get_mark_and_group_paths() {
    let scene = sample_scene();
    assert!(scene.get_mark(&[]).is_none());
    assert!(matches!(scene.get_mark(&[1, 0, 0]), Some(SceneMark::Rect(_))));
    assert_eq!(scene.group_paths(), vec![vec![0], vec![1], vec![1, 0]]);
    assert_eq!(scene.group_names().get("bars"), Some(&vec![1, 0]));
}

#[test]
fn test_leaf_marks_are_depth_first() {
    let scene = sample_scene();
    let names: Vec<_> = scene.leaf_marks().iter().map(|m| m.name().to_string()).collect();
    assert_eq!(names, vec!["gridlines", "rect_mark"]);
}

#[test]
fn test_serializes_to_json() {
    let scene = sample_scene();
    let json = serde_json::to_string(&scene).unwrap();
    let back: SceneGraph = serde_json::from_str(&json).unwrap();
    assert_eq!(back, scene);
}

#[test]
fn test_placeholder_is_empty() {
    let scene = SceneGraph::placeholder(320.0, 200.0);
    assert!(scene.is_empty());
    assert_eq!(scene.width, 320.0);
}
