use chartkit_common::canvas::ContainerSize;
use chartkit_common::types::{Rgba, BLACK};
use chartkit_scenegraph::marks::{
    group::SceneGroup, rect::SceneRectMark, rule::SceneRuleMark, text::SceneTextMark,
};
use chartkit_scenegraph::scene_graph::SceneGraph;
use chartkit_text::types::{FontSpec, TextAlign, TextBaseline};

use crate::config::{ChartConfig, ChartKind, ResolvedStyle};
use crate::constants::{
    AXIS_TITLE_FONT_SIZE, BASELINE_COLOR, MUTED_TEXT_COLOR, SUBTITLE_Y, TITLE_Y,
};
use crate::layout::Padding;

/// Paint order of the top-level scene groups, back to front
pub const LAYER_ORDER: [&str; 9] = [
    "background",
    "titles",
    "axis-baselines",
    "grid",
    "trendlines",
    "marks",
    "value-axis",
    "category-labels",
    "axis-titles",
];

/// Layers produced by a chart engine. The shell adds the chrome around them.
pub(crate) struct ChartLayers {
    pub grid: SceneGroup,
    pub trendlines: SceneGroup,
    pub marks: SceneGroup,
    pub value_axis: SceneGroup,
    pub category_labels: SceneGroup,
    pub axis_titles: SceneGroup,
}

impl Default for ChartLayers {
    fn default() -> Self {
        Self {
            grid: SceneGroup::named("grid"),
            trendlines: SceneGroup::named("trendlines"),
            marks: SceneGroup::named("marks"),
            value_axis: SceneGroup::named("value-axis"),
            category_labels: SceneGroup::named("category-labels"),
            axis_titles: SceneGroup::named("axis-titles"),
        }
    }
}

/// Assemble the final scene. Every layer is present, even when empty, so
/// consumers can address layers by position as well as by name.
pub(crate) fn compose_scene(
    size: ContainerSize,
    padding: Padding,
    config: &ChartConfig,
    style: &ResolvedStyle,
    layers: ChartLayers,
) -> SceneGraph {
    let ChartLayers {
        grid,
        trendlines,
        marks,
        value_axis,
        category_labels,
        axis_titles,
    } = layers;

    let ordered = [
        make_background(size, style),
        make_titles(size, config, style),
        make_axis_baselines(size, padding, config),
        grid,
        trendlines,
        marks,
        value_axis,
        category_labels,
        axis_titles,
    ];

    let mut scene = SceneGraph::placeholder(size.width, size.height);
    for (mut group, name) in ordered.into_iter().zip(LAYER_ORDER) {
        group.name = name.to_string();
        scene.marks.push(group.into());
    }
    scene
}

fn make_background(size: ContainerSize, style: &ResolvedStyle) -> SceneGroup {
    let mut group = SceneGroup::named("background");
    group.push(SceneRectMark {
        name: "background".to_string(),
        width: size.width.into(),
        height: size.height.into(),
        fill: style.background.into(),
        corner_radius: 0.0.into(),
        ..Default::default()
    });
    group
}

fn make_titles(size: ContainerSize, config: &ChartConfig, style: &ResolvedStyle) -> SceneGroup {
    let mut group = SceneGroup::named("titles");
    if !config.title.is_empty() {
        group.push(centered_text(
            "title",
            &config.title,
            [size.width / 2.0, TITLE_Y],
            &style.caption_font,
            BLACK,
        ));
    }
    if config.show_description && !config.subtitle.is_empty() {
        let color = match config.kind {
            ChartKind::Column => BLACK,
            ChartKind::Line => MUTED_TEXT_COLOR,
        };
        group.push(centered_text(
            "subtitle",
            &config.subtitle,
            [size.width / 2.0, SUBTITLE_Y],
            &style.sub_caption_font,
            color,
        ));
    }
    group
}

/// The value axis line on the left and the category axis line along the
/// bottom of the plot area
pub(crate) fn make_axis_baselines(
    size: ContainerSize,
    padding: Padding,
    config: &ChartConfig,
) -> SceneGroup {
    let [x0, y0, x1, y1] = padding.plot_bounds(size);
    let mut group = SceneGroup::named("axis-baselines");
    if config.show_y_axis_line {
        group.push(baseline("y-axis-line", [x0, y0], [x0, y1]));
    }
    if config.show_x_axis_line {
        group.push(baseline("x-axis-line", [x0, y1], [x1, y1]));
    }
    group
}

fn baseline(name: &str, from: [f32; 2], to: [f32; 2]) -> SceneRuleMark {
    SceneRuleMark {
        name: name.to_string(),
        x: from[0].into(),
        y: from[1].into(),
        x2: to[0].into(),
        y2: to[1].into(),
        stroke: BASELINE_COLOR.into(),
        stroke_width: 1.0.into(),
        ..Default::default()
    }
}

/// Axis titles at 11px. The muted y title is rotated a quarter turn
/// counter-clockwise about its anchor and centered on it.
pub(crate) fn make_axis_titles(
    config: &ChartConfig,
    x_anchor: [f32; 2],
    y_anchor: [f32; 2],
) -> SceneGroup {
    let font = FontSpec::sans_serif(AXIS_TITLE_FONT_SIZE);
    let mut group = SceneGroup::named("axis-titles");
    if !config.axis_names.x.is_empty() {
        group.push(centered_text(
            "x-title",
            &config.axis_names.x,
            x_anchor,
            &font,
            BLACK,
        ));
    }
    if !config.axis_names.y.is_empty() {
        let mut title = centered_text(
            "y-title",
            &config.axis_names.y,
            y_anchor,
            &font,
            MUTED_TEXT_COLOR,
        );
        title.angle = (-90.0).into();
        title.baseline = TextBaseline::Middle.into();
        group.push(title);
    }
    group
}

fn centered_text(
    name: &str,
    text: &str,
    [x, y]: [f32; 2],
    font: &FontSpec,
    color: Rgba,
) -> SceneTextMark {
    SceneTextMark {
        name: name.to_string(),
        text: text.to_string().into(),
        x: x.into(),
        y: y.into(),
        align: TextAlign::Center.into(),
        baseline: TextBaseline::Alphabetic.into(),
        color: color.into(),
        ..Default::default()
    }
    .with_font(font)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartkit_scenegraph::marks::mark::SceneMark;

    #[test]
    fn test_layers_in_paint_order() {
        let config = ChartConfig::defaults(ChartKind::Column);
        let style = config.validate().unwrap();
        let scene = compose_scene(
            ContainerSize::new(400.0, 300.0),
            Padding::default(),
            &config,
            &style,
            ChartLayers::default(),
        );
        assert_eq!(scene.layer_names(), LAYER_ORDER.to_vec());
    }

    #[test]
    fn test_subtitle_follows_show_description() {
        let mut config = ChartConfig::defaults(ChartKind::Column);
        config.title = "Sales".to_string();
        config.subtitle = "2024".to_string();
        let style = config.validate().unwrap();
        let size = ContainerSize::new(400.0, 300.0);

        let titles = make_titles(size, &config, &style);
        assert_eq!(titles.marks.len(), 2);
        let SceneMark::Text(title) = &titles.marks[0] else {
            panic!("expected title text");
        };
        assert_eq!(title.x.get(0), Some(&200.0));
        assert_eq!(title.y.get(0), Some(&24.0));
        assert_eq!(title.font_size.get(0), Some(&16.0));

        config.show_description = false;
        assert_eq!(make_titles(size, &config, &style).marks.len(), 1);
    }

    #[test]
    fn test_subtitle_color_by_kind() {
        let size = ContainerSize::new(400.0, 300.0);
        for (kind, expected) in [
            (ChartKind::Column, BLACK),
            (ChartKind::Line, MUTED_TEXT_COLOR),
        ] {
            let mut config = ChartConfig::defaults(kind);
            config.subtitle = "2024".to_string();
            let style = config.validate().unwrap();
            let titles = make_titles(size, &config, &style);
            let SceneMark::Text(subtitle) = &titles.marks[0] else {
                panic!("expected subtitle text");
            };
            assert_eq!(subtitle.color.get(0), Some(&expected));
        }
    }

    #[test]
    fn test_baselines_follow_flags() {
        let mut config = ChartConfig::defaults(ChartKind::Column);
        let size = ContainerSize::new(400.0, 300.0);
        let padding = Padding {
            left: 60.0,
            right: 40.0,
            top: 40.0,
            bottom: 40.0,
        };
        let group = make_axis_baselines(size, padding, &config);
        let SceneMark::Rule(x_line) = &group.marks[1] else {
            panic!("expected x axis line");
        };
        assert_eq!(x_line.x.get(0), Some(&60.0));
        assert_eq!(x_line.x2.get(0), Some(&360.0));
        assert_eq!(x_line.y.get(0), Some(&260.0));

        config.show_x_axis_line = false;
        config.show_y_axis_line = false;
        assert!(make_axis_baselines(size, padding, &config).is_empty());
    }
}
