use chartkit_common::types::{parse_color, Rgba};
use chartkit_scales::linear::LinearScale;
use chartkit_scenegraph::marks::{group::SceneGroup, rule::SceneRuleMark, text::SceneTextMark};
use chartkit_text::types::{FontSpec, TextAlign, TextBaseline};

use crate::constants::{TRENDLINE_DASH, TRENDLINE_LABEL_FONT_SIZE, TRENDLINE_LABEL_LIFT};
use crate::data::TrendlineGroup;
use crate::error::LayoutWarning;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedTrendline {
    pub value: f32,
    pub label: String,
    pub on_right: bool,
    pub color: Rgba,
    pub thickness: f32,
}

/// Flatten trendline groups in input order. Lines whose start value does
/// not parse are dropped.
pub(crate) fn resolve_trendlines(
    groups: &[TrendlineGroup],
    default_color: Rgba,
    warnings: &mut Vec<LayoutWarning>,
) -> Vec<ResolvedTrendline> {
    let mut resolved = vec![];
    for (group_index, group) in groups.iter().enumerate() {
        for (line_index, line) in group.line.iter().enumerate() {
            let Some(value) = line.startvalue.parse().map(|v| v as f32) else {
                LayoutWarning::UnparsableTrendline {
                    group: group_index,
                    line: line_index,
                    raw: line.startvalue.raw(),
                }
                .report(warnings);
                continue;
            };
            let color = match &line.color {
                Some(color) => parse_color(color).unwrap_or_else(|_| {
                    LayoutWarning::InvalidColor {
                        index: resolved.len(),
                        color: color.clone(),
                    }
                    .report(warnings);
                    default_color
                }),
                None => default_color,
            };
            resolved.push(ResolvedTrendline {
                value,
                label: line.displayvalue.replace("{br}", " "),
                on_right: line.value_on_right.is_set(),
                color,
                thickness: line
                    .thickness
                    .filter(|t| t.is_finite() && *t > 0.0)
                    .unwrap_or(1.0),
            });
        }
    }
    resolved
}

/// Dashed horizontal rules across `[x0, x1]` at each threshold, labeled
/// just above the line at the left or right end.
pub(crate) fn make_trendline_marks(
    trendlines: &[ResolvedTrendline],
    scale: &LinearScale,
    (x0, x1): (f32, f32),
) -> SceneGroup {
    let mut group = SceneGroup::named("trendlines");
    if trendlines.is_empty() {
        return group;
    }

    let len = trendlines.len() as u32;
    let ys = trendlines
        .iter()
        .map(|t| scale.scale(t.value))
        .collect::<Vec<_>>();
    let colors = trendlines.iter().map(|t| t.color).collect::<Vec<_>>();

    group.push(SceneRuleMark {
        name: "trendline-rules".to_string(),
        len,
        stroke_dash: Some(TRENDLINE_DASH.to_vec()),
        x: x0.into(),
        x2: x1.into(),
        y: ys.clone().into(),
        y2: ys.clone().into(),
        stroke: colors.clone().into(),
        stroke_width: trendlines
            .iter()
            .map(|t| t.thickness)
            .collect::<Vec<_>>()
            .into(),
        ..Default::default()
    });

    group.push(
        SceneTextMark {
            name: "trendline-labels".to_string(),
            len,
            text: trendlines
                .iter()
                .map(|t| t.label.clone())
                .collect::<Vec<_>>()
                .into(),
            x: trendlines
                .iter()
                .map(|t| if t.on_right { x1 } else { x0 })
                .collect::<Vec<_>>()
                .into(),
            y: ys
                .iter()
                .map(|y| y - TRENDLINE_LABEL_LIFT)
                .collect::<Vec<_>>()
                .into(),
            align: trendlines
                .iter()
                .map(|t| {
                    if t.on_right {
                        TextAlign::Right
                    } else {
                        TextAlign::Left
                    }
                })
                .collect::<Vec<_>>()
                .into(),
            baseline: TextBaseline::Alphabetic.into(),
            color: colors.into(),
            ..Default::default()
        }
        .with_font(&FontSpec::sans_serif(TRENDLINE_LABEL_FONT_SIZE)),
    );

    group
}
