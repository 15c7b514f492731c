use chartkit_common::canvas::ContainerSize;
use chartkit_common::types::{StrokeCap, StrokeJoin, BLACK};
use chartkit_guides::axis::make_value_axis_marks;
use chartkit_guides::grid::{make_grid_marks, GridAxis};
use chartkit_guides::opts::{AxisConfig, AxisOrientation, GridConfig};
use chartkit_scales::linear::LinearScale;
use chartkit_scales::ticks::even_ticks;
use chartkit_scales::{max_finite, min_finite};
use chartkit_scenegraph::marks::mark::Reveal;
use chartkit_scenegraph::marks::{
    group::SceneGroup, line::SceneLineMark, symbol::SceneSymbolMark, text::SceneTextMark,
};
use chartkit_text::types::{FontSpec, TextAlign, TextBaseline};

use crate::config::{format_datum, ChartConfig, ResolvedStyle};
use crate::constants::{
    LINE_CATEGORY_LABEL_OFFSET, LINE_VALUE_LABEL_LIFT, LINE_X_TITLE_INSET, LINE_Y_TITLE_INSET,
    PATH_REVEAL_MS, POINT_HIT_SLOP, POINT_REVEAL_MS, POINT_REVEAL_STAGGER_MS,
    VALUE_LABEL_FONT_SIZE,
};
use crate::data::{coerce_values, LinePoint};
use crate::error::ChartError;
use crate::interaction::HitRegion;
use crate::layout::{ChartLayout, Padding};
use crate::shell::{compose_scene, make_axis_titles, ChartLayers};
use crate::trendline::{make_trendline_marks, resolve_trendlines};

/// Horizontal vertex positions across `[x0, x1]`.
///
/// Points are spread evenly by index unless every point carries an `x`, in
/// which case `x` is scaled linearly. A single point, or points sharing one
/// `x`, sit at the horizontal center.
pub fn point_positions(points: &[LinePoint], (x0, x1): (f32, f32)) -> Vec<f32> {
    let center = (x0 + x1) / 2.0;
    let explicit = points.iter().map(|p| p.x).collect::<Option<Vec<f32>>>();

    match explicit {
        Some(xs) if !xs.is_empty() => {
            let lo = min_finite(xs.iter().copied());
            let hi = max_finite(xs.iter().copied());
            match (lo, hi) {
                (Some(lo), Some(hi)) if hi > lo => {
                    let scale = LinearScale::new((lo, hi), (x0, x1));
                    scale.scale_all(&xs)
                }
                _ => vec![center; xs.len()],
            }
        }
        _ => {
            let n = points.len();
            match n {
                0 => return vec![],
                1 => return vec![center],
                _ => {}
            }
            let step = (x1 - x0) / (n - 1) as f32;
            (0..n).map(|i| x0 + i as f32 * step).collect()
        }
    }
}

pub(crate) fn layout_line(
    points: &[LinePoint],
    config: &ChartConfig,
    style: &ResolvedStyle,
    size: ContainerSize,
) -> Result<ChartLayout, ChartError> {
    let mut warnings = vec![];
    let exact = coerce_values(
        points.iter().map(|p| (p.label.as_str(), &p.value)),
        &mut warnings,
    );
    let values = exact.iter().map(|v| *v as f32).collect::<Vec<_>>();
    let trendlines = if config.show_trendlines {
        resolve_trendlines(&config.trendlines, style.trendline, &mut warnings)
    } else {
        vec![]
    };
    let max_value =
        max_finite(values.iter().copied().chain(trendlines.iter().map(|t| t.value))).unwrap_or(0.0);

    let padding = Padding {
        left: config.padding_left,
        right: config.padding_right,
        top: config.padding_top,
        bottom: config.padding_bottom,
    };
    let [x0, y0, x1, y1] = padding.plot_bounds(size);
    let y_scale = LinearScale::new((0.0, max_value), (y1, y0));
    let ticks = even_ticks(max_value, config.axis.y_ticks)?;

    let xs = point_positions(points, (x0, x1));
    let ys = y_scale.scale_all(&values);
    let len = points.len() as u32;

    let mut marks = SceneGroup::named("marks");
    marks.push(SceneLineMark {
        name: "line".to_string(),
        len,
        x: xs.clone().into(),
        y: ys.clone().into(),
        stroke: style.line,
        stroke_width: config.line_thickness,
        stroke_cap: StrokeCap::Round,
        stroke_join: StrokeJoin::Round,
        reveal: config.line.animate.then_some(Reveal {
            begin_ms: 0,
            stagger_ms: 0,
            duration_ms: PATH_REVEAL_MS,
        }),
        ..Default::default()
    });
    marks.push(SceneSymbolMark {
        name: "points".to_string(),
        len,
        x: xs.clone().into(),
        y: ys.clone().into(),
        radius: config.line.point_radius.into(),
        fill: style.line.into(),
        reveal: config.line.animate.then_some(Reveal {
            begin_ms: 0,
            stagger_ms: POINT_REVEAL_STAGGER_MS,
            duration_ms: POINT_REVEAL_MS,
        }),
        ..Default::default()
    });
    if config.show_values {
        marks.push(
            SceneTextMark {
                name: "value-labels".to_string(),
                len,
                text: exact
                    .iter()
                    .map(|v| format!("{}{}", config.number_prefix, format_datum(*v)))
                    .collect::<Vec<_>>()
                    .into(),
                x: xs.clone().into(),
                y: ys
                    .iter()
                    .map(|y| y - LINE_VALUE_LABEL_LIFT)
                    .collect::<Vec<_>>()
                    .into(),
                align: TextAlign::Center.into(),
                baseline: TextBaseline::Alphabetic.into(),
                color: BLACK.into(),
                ..Default::default()
            }
            .with_font(&FontSpec::sans_serif(VALUE_LABEL_FONT_SIZE)),
        );
    }

    let mut category_labels = SceneGroup::named("category-labels");
    category_labels.push(
        SceneTextMark {
            name: "category-labels".to_string(),
            len,
            text: points
                .iter()
                .map(|p| p.label.clone())
                .collect::<Vec<_>>()
                .into(),
            x: xs.clone().into(),
            y: (size.height - padding.bottom + LINE_CATEGORY_LABEL_OFFSET).into(),
            align: TextAlign::Center.into(),
            ..Default::default()
        }
        .with_font(&style.x_label_font),
    );

    let grid = if config.show_grid {
        make_grid_marks(
            None,
            Some(GridAxis {
                scale: &y_scale,
                ticks: &ticks,
            }),
            size.width,
            size.height,
            &GridConfig::default(),
        )
    } else {
        SceneGroup::named("grid")
    };

    let layers = ChartLayers {
        grid,
        trendlines: make_trendline_marks(&trendlines, &y_scale, (x0, x1)),
        marks,
        value_axis: make_value_axis_marks(
            &y_scale,
            &ticks,
            [x0, 0.0],
            &AxisConfig::new(AxisOrientation::Left, style.y_label_font.clone()).with_ticks(false),
            |v| format!("{}{}", config.number_prefix, config.axis.format_y.format(v)),
        ),
        category_labels,
        axis_titles: make_axis_titles(
            config,
            [size.width / 2.0, size.height - LINE_X_TITLE_INSET],
            [x0 - LINE_Y_TITLE_INSET, size.height / 2.0],
        ),
    };

    let hit_regions = xs
        .iter()
        .zip(&ys)
        .enumerate()
        .map(|(index, (x, y))| HitRegion::Circle {
            index,
            center: [*x, *y],
            radius: config.line.point_radius + POINT_HIT_SLOP,
        })
        .collect();

    Ok(ChartLayout {
        scene: compose_scene(size, padding, config, style, layers),
        size,
        padding,
        max_value,
        value_ticks: ticks,
        hit_regions,
        warnings,
    })
}
