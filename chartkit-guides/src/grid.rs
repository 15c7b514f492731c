use chartkit_scales::linear::LinearScale;
use chartkit_scenegraph::marks::{group::SceneGroup, rule::SceneRuleMark};

use crate::opts::GridConfig;

/// Ticks along one scale, drawn as reference lines across the other dimension
pub struct GridAxis<'a> {
    pub scale: &'a LinearScale,
    pub ticks: &'a [f32],
}

/// Reference lines at tick positions: one horizontal line per `y` tick
/// spanning `[0, width]` and one vertical line per `x` tick spanning
/// `[0, height]`.
pub fn make_grid_marks(
    x: Option<GridAxis>,
    y: Option<GridAxis>,
    width: f32,
    height: f32,
    config: &GridConfig,
) -> SceneGroup {
    let mut group = SceneGroup::named("grid");

    if let Some(GridAxis { scale, ticks }) = x.filter(|axis| !axis.ticks.is_empty()) {
        let xs = ticks.iter().map(|t| scale.scale(*t)).collect::<Vec<_>>();
        group.push(SceneRuleMark {
            name: "x-gridlines".to_string(),
            len: ticks.len() as u32,
            stroke_dash: Some(config.stroke_dash.clone()),
            x: xs.clone().into(),
            x2: xs.into(),
            y: 0.0.into(),
            y2: height.into(),
            stroke: config.stroke.into(),
            stroke_width: config.stroke_width.into(),
            ..Default::default()
        });
    }

    if let Some(GridAxis { scale, ticks }) = y.filter(|axis| !axis.ticks.is_empty()) {
        let ys = ticks.iter().map(|t| scale.scale(*t)).collect::<Vec<_>>();
        group.push(SceneRuleMark {
            name: "y-gridlines".to_string(),
            len: ticks.len() as u32,
            stroke_dash: Some(config.stroke_dash.clone()),
            x: 0.0.into(),
            x2: width.into(),
            y: ys.clone().into(),
            y2: ys.into(),
            stroke: config.stroke.into(),
            stroke_width: config.stroke_width.into(),
            ..Default::default()
        });
    }

    group
}
