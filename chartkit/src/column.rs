use chartkit_common::canvas::ContainerSize;
use chartkit_common::types::{parse_color, BLACK};
use chartkit_guides::axis::make_value_axis_marks;
use chartkit_guides::grid::{make_grid_marks, GridAxis};
use chartkit_guides::opts::{AxisConfig, AxisOrientation, GridConfig};
use chartkit_scales::linear::LinearScale;
use chartkit_scales::max_finite;
use chartkit_scales::ticks::rounded_ticks;
use chartkit_scenegraph::marks::{group::SceneGroup, rect::SceneRectMark, text::SceneTextMark};
use chartkit_text::measurement::TextMeasurer;
use chartkit_text::types::{FontSpec, TextAlign, TextBaseline};

use crate::config::{format_datum, ChartConfig, Orientation, ResolvedStyle};
use crate::constants::{
    AXIS_TITLE_FONT_SIZE, BAR_VALUE_LABEL_GAP, BAR_VALUE_LABEL_LIFT, BAR_VALUE_LABEL_SHIFT,
    COLUMN_CATEGORY_LABEL_OFFSET, COLUMN_X_TITLE_INSET, ROW_LABEL_GAP, ROW_LABEL_SHIFT,
    VALUE_LABEL_FONT_SIZE,
};
use crate::data::{coerce_values, ColumnDatum};
use crate::error::{ChartError, LayoutWarning};
use crate::interaction::HitRegion;
use crate::layout::{ChartLayout, Padding};
use crate::shell::{compose_scene, make_axis_titles, ChartLayers};
use crate::trendline::{make_trendline_marks, resolve_trendlines};

/// Left padding wide enough for the rotated y-axis title, the value labels
/// and the gap between them, but never less than configured
pub fn column_padding_left(config: &ChartConfig, measurer: &dyn TextMeasurer) -> f32 {
    let title_font = FontSpec::sans_serif(AXIS_TITLE_FONT_SIZE);
    let title_width = measurer.measure_width(&config.axis_names.y, &title_font);
    config.padding_left.max(
        title_width + config.axis.y_axis_label_offset + config.axis.y_axis_title_padding,
    )
}

/// Band geometry shared by every bar: the band each category occupies
/// along the category axis, the bar thickness and its offset in the band
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bands {
    pub band: f32,
    pub thickness: f32,
    pub offset: f32,
}

impl Bands {
    pub fn new(extent: f32, count: usize, spacing: f32, width: Option<f32>) -> Self {
        let band = extent / count as f32;
        let (thickness, offset) = match width {
            Some(width) => (width, (band - width) / 2.0),
            None => ((band - spacing).max(0.0), spacing / 2.0),
        };
        Self {
            band,
            thickness,
            offset,
        }
    }

    pub fn start(&self, origin: f32, index: usize) -> f32 {
        origin + index as f32 * self.band + self.offset
    }

    pub fn center(&self, origin: f32, index: usize) -> f32 {
        origin + index as f32 * self.band + self.band / 2.0
    }
}

pub(crate) fn layout_column(
    data: &[ColumnDatum],
    config: &ChartConfig,
    style: &ResolvedStyle,
    size: ContainerSize,
    measurer: &dyn TextMeasurer,
) -> Result<ChartLayout, ChartError> {
    let mut warnings = vec![];
    let exact = coerce_values(
        data.iter().map(|d| (d.label.as_str(), &d.value)),
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
        left: column_padding_left(config, measurer),
        right: config.padding_right,
        top: config.padding_top,
        bottom: config.padding_bottom,
    };
    let [x0, y0, x1, y1] = padding.plot_bounds(size);
    let vertical = config.orientation == Orientation::Vertical;

    let scale = if vertical {
        LinearScale::new((0.0, max_value), (y1, y0))
    } else {
        LinearScale::new((0.0, max_value), (x0, x1))
    };
    let bands = Bands::new(
        if vertical { x1 - x0 } else { y1 - y0 },
        data.len(),
        config.bar.spacing,
        config.bar.width,
    );
    let ticks = rounded_ticks(max_value, config.axis.y_ticks)?;

    // Bars as normalized rects, so negative values extend below the baseline
    let mut bounds = Vec::with_capacity(data.len());
    let mut label_anchors = Vec::with_capacity(data.len());
    for (i, value) in values.iter().enumerate() {
        let pos = scale.scale(*value);
        if vertical {
            let x = bands.start(x0, i);
            bounds.push([x, pos.min(y1), x + bands.thickness, pos.max(y1)]);
            label_anchors.push([x + bands.thickness / 2.0, pos - BAR_VALUE_LABEL_LIFT]);
        } else {
            let y = bands.start(y0, i);
            bounds.push([pos.min(x0), y, pos.max(x0), y + bands.thickness]);
            label_anchors.push([
                pos + BAR_VALUE_LABEL_GAP,
                y + bands.thickness / 2.0 + BAR_VALUE_LABEL_SHIFT,
            ]);
        }
    }

    let fills = data
        .iter()
        .enumerate()
        .map(|(index, d)| match &d.color {
            Some(color) => parse_color(color).unwrap_or_else(|_| {
                LayoutWarning::InvalidColor {
                    index,
                    color: color.clone(),
                }
                .report(&mut warnings);
                style.bar
            }),
            None => style.bar,
        })
        .collect::<Vec<_>>();

    let len = data.len() as u32;
    let mut marks = SceneGroup::named("marks");
    marks.push(SceneRectMark {
        name: "bars".to_string(),
        len,
        x: bounds.iter().map(|b| b[0]).collect::<Vec<_>>().into(),
        y: bounds.iter().map(|b| b[1]).collect::<Vec<_>>().into(),
        width: bounds.iter().map(|b| b[2] - b[0]).collect::<Vec<_>>().into(),
        height: bounds.iter().map(|b| b[3] - b[1]).collect::<Vec<_>>().into(),
        fill: fills.into(),
        hover_fill: Some(style.hover),
        corner_radius: config.bar.radius.into(),
        tooltip: Some(
            data.iter()
                .map(|d| d.description.clone().unwrap_or_default())
                .collect::<Vec<_>>()
                .into(),
        ),
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
                x: label_anchors.iter().map(|a| a[0]).collect::<Vec<_>>().into(),
                y: label_anchors.iter().map(|a| a[1]).collect::<Vec<_>>().into(),
                align: if vertical {
                    TextAlign::Center
                } else {
                    TextAlign::Left
                }
                .into(),
                baseline: TextBaseline::Alphabetic.into(),
                color: BLACK.into(),
                ..Default::default()
            }
            .with_font(&FontSpec::sans_serif(VALUE_LABEL_FONT_SIZE)),
        );
    }

    let format_tick = |v: f32| format!("{}{}", config.number_prefix, config.axis.format_y.format(v));
    let grid_axis = GridAxis {
        scale: &scale,
        ticks: &ticks,
    };
    let mut layers = ChartLayers {
        marks,
        ..Default::default()
    };

    if vertical {
        if config.show_grid {
            layers.grid = make_grid_marks(
                None,
                Some(grid_axis),
                size.width,
                size.height,
                &GridConfig::default(),
            );
        }
        layers.value_axis = make_value_axis_marks(
            &scale,
            &ticks,
            [x0, 0.0],
            &AxisConfig::new(AxisOrientation::Left, style.y_label_font.clone()),
            format_tick,
        );
        // Trendlines are horizontal rules and only read on vertical bars
        layers.trendlines = make_trendline_marks(&trendlines, &scale, (x0, x1));
        layers.axis_titles = make_axis_titles(
            config,
            [size.width / 2.0, size.height - COLUMN_X_TITLE_INSET],
            [
                x0 - config.axis.y_axis_label_offset - config.axis.y_axis_title_padding,
                size.height / 2.0,
            ],
        );
    } else {
        if config.show_grid {
            layers.grid = make_grid_marks(
                Some(grid_axis),
                None,
                size.width,
                size.height,
                &GridConfig::default(),
            );
        }
        layers.value_axis = make_value_axis_marks(
            &scale,
            &ticks,
            [0.0, y1],
            &AxisConfig::new(AxisOrientation::Bottom, style.y_label_font.clone()),
            format_tick,
        );
    }

    layers.category_labels = make_category_labels(data, &bands, config, style, size, padding);

    let hit_regions = bounds
        .iter()
        .enumerate()
        .map(|(index, bounds)| HitRegion::Rect {
            index,
            bounds: *bounds,
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

fn make_category_labels(
    data: &[ColumnDatum],
    bands: &Bands,
    config: &ChartConfig,
    style: &ResolvedStyle,
    size: ContainerSize,
    padding: Padding,
) -> SceneGroup {
    let mut group = SceneGroup::named("category-labels");
    let len = data.len() as u32;
    let text = data.iter().map(|d| d.label.clone()).collect::<Vec<_>>();

    let labels = match config.orientation {
        Orientation::Vertical => SceneTextMark {
            name: "category-labels".to_string(),
            len,
            text: text.into(),
            x: (0..data.len())
                .map(|i| bands.center(padding.left, i))
                .collect::<Vec<_>>()
                .into(),
            y: (size.height - padding.bottom + COLUMN_CATEGORY_LABEL_OFFSET).into(),
            align: TextAlign::Center.into(),
            ..Default::default()
        },
        Orientation::Horizontal => SceneTextMark {
            name: "category-labels".to_string(),
            len,
            text: text.into(),
            x: (padding.left - ROW_LABEL_GAP).into(),
            y: (0..data.len())
                .map(|i| bands.center(padding.top, i) + ROW_LABEL_SHIFT)
                .collect::<Vec<_>>()
                .into(),
            align: TextAlign::Right.into(),
            ..Default::default()
        },
    };
    group.push(labels.with_font(&style.x_label_font));
    group
}
