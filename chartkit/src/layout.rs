use chartkit_common::canvas::ContainerSize;
use chartkit_scenegraph::scene_graph::SceneGraph;
use serde::Serialize;

use crate::error::LayoutWarning;
use crate::interaction::HitRegion;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Padding {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Padding {
    /// Plot area as `[x0, y0, x1, y1]` within a chart of `size`
    pub fn plot_bounds(&self, size: ContainerSize) -> [f32; 4] {
        [
            self.left,
            self.top,
            size.width - self.right,
            size.height - self.bottom,
        ]
    }
}

/// Output of one layout pass. Recomputed from scratch on every size or
/// input change; identical inputs give identical layouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLayout {
    pub scene: SceneGraph,
    pub size: ContainerSize,
    pub padding: Padding,
    /// Upper end of the value domain
    pub max_value: f32,
    pub value_ticks: Vec<f32>,
    pub hit_regions: Vec<HitRegion>,
    pub warnings: Vec<LayoutWarning>,
}

impl ChartLayout {
    /// A sized, empty layout for containers that are not measured yet or
    /// charts without data
    pub fn placeholder(size: ContainerSize) -> Self {
        Self {
            scene: SceneGraph::placeholder(size.width, size.height),
            size,
            padding: Padding::default(),
            max_value: 0.0,
            value_ticks: vec![],
            hit_regions: vec![],
            warnings: vec![],
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.scene.is_empty()
    }
}
