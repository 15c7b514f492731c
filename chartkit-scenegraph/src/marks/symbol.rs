use super::mark::{Reveal, SceneMark};
use chartkit_common::types::{Rgba, BLACK, TRANSPARENT};
use chartkit_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

/// Circular point markers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneSymbolMark {
    pub name: String,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub radius: ScalarOrArray<f32>,
    pub fill: ScalarOrArray<Rgba>,
    pub stroke: ScalarOrArray<Rgba>,
    pub stroke_width: Option<f32>,
    /// Per-instance reveal, staggered by index
    pub reveal: Option<Reveal>,
    pub zindex: Option<i32>,
}

impl SceneSymbolMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize)
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize)
    }

    pub fn radius_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.radius.as_iter(self.len as usize)
    }

    pub fn x_vec(&self) -> Vec<f32> {
        self.x_iter().cloned().collect()
    }

    pub fn y_vec(&self) -> Vec<f32> {
        self.y_iter().cloned().collect()
    }

    /// Reveal start time for each instance, empty when not animated
    pub fn reveal_begin_vec(&self) -> Vec<u32> {
        match self.reveal {
            Some(reveal) => (0..self.len as usize).map(|i| reveal.begin_for(i)).collect(),
            None => vec![],
        }
    }
}

impl Default for SceneSymbolMark {
    fn default() -> Self {
        Self {
            name: "symbol_mark".to_string(),
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            radius: ScalarOrArray::new_scalar(3.0),
            fill: ScalarOrArray::new_scalar(BLACK),
            stroke: ScalarOrArray::new_scalar(TRANSPARENT),
            stroke_width: None,
            reveal: None,
            zindex: None,
        }
    }
}

impl From<SceneSymbolMark> for SceneMark {
    fn from(mark: SceneSymbolMark) -> Self {
        SceneMark::Symbol(mark)
    }
}
