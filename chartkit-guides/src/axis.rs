use chartkit_scales::linear::LinearScale;
use chartkit_scenegraph::marks::{group::SceneGroup, rule::SceneRuleMark, text::SceneTextMark};
use chartkit_text::types::{TextAlign, TextBaseline};

use super::opts::{AxisConfig, AxisOrientation};

/// Gap between the axis line and the end of a left-axis label
const LEFT_LABEL_GAP: f32 = 8.0;
/// Baseline shift that vertically centers a left-axis label on its tick
const LEFT_LABEL_SHIFT: f32 = 4.0;
/// Distance from the axis line to a bottom-axis label baseline
const BOTTOM_LABEL_OFFSET: f32 = 18.0;

/// Tick marks and formatted labels for a value axis.
///
/// `origin` is the position of the axis line: `[x, 0]` for a left axis and
/// `[0, y]` for a bottom axis, so scaled tick positions stay absolute along
/// the axis direction. Makes no layout decisions of its own.
pub fn make_value_axis_marks(
    scale: &LinearScale,
    ticks: &[f32],
    origin: [f32; 2],
    config: &AxisConfig,
    format: impl Fn(f32) -> String,
) -> SceneGroup {
    let mut group = SceneGroup {
        name: "value-axis".to_string(),
        origin,
        ..Default::default()
    };
    if ticks.is_empty() {
        return group;
    }

    let positions = ticks.iter().map(|t| scale.scale(*t)).collect::<Vec<_>>();
    let labels = ticks.iter().map(|t| format(*t)).collect::<Vec<_>>();
    let len = ticks.len() as u32;

    match config.orientation {
        AxisOrientation::Left => {
            if config.show_ticks {
                group.push(SceneRuleMark {
                    name: "ticks".to_string(),
                    len,
                    x: 0.0.into(),
                    x2: (-config.tick_length).into(),
                    y: positions.clone().into(),
                    y2: positions.clone().into(),
                    stroke: config.tick_color.into(),
                    ..Default::default()
                });
            }
            group.push(
                SceneTextMark {
                    name: "labels".to_string(),
                    len,
                    text: labels.into(),
                    x: (-LEFT_LABEL_GAP).into(),
                    y: positions
                        .iter()
                        .map(|y| y + LEFT_LABEL_SHIFT)
                        .collect::<Vec<_>>()
                        .into(),
                    align: TextAlign::Right.into(),
                    baseline: TextBaseline::Alphabetic.into(),
                    color: config.label_color.into(),
                    ..Default::default()
                }
                .with_font(&config.font),
            );
        }
        AxisOrientation::Bottom => {
            if config.show_ticks {
                group.push(SceneRuleMark {
                    name: "ticks".to_string(),
                    len,
                    x: positions.clone().into(),
                    x2: positions.clone().into(),
                    y: 0.0.into(),
                    y2: config.tick_length.into(),
                    stroke: config.tick_color.into(),
                    ..Default::default()
                });
            }
            group.push(
                SceneTextMark {
                    name: "labels".to_string(),
                    len,
                    text: labels.into(),
                    x: positions.into(),
                    y: BOTTOM_LABEL_OFFSET.into(),
                    align: TextAlign::Center.into(),
                    baseline: TextBaseline::Alphabetic.into(),
                    color: config.label_color.into(),
                    ..Default::default()
                }
                .with_font(&config.font),
            );
        }
    }

    group
}
