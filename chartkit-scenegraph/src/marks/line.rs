use super::mark::{Reveal, SceneMark};
use chartkit_common::types::{Rgba, StrokeCap, StrokeJoin, BLACK};
use chartkit_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};

/// An open polyline through `len` vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneLineMark {
    pub name: String,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub stroke: Rgba,
    pub stroke_width: f32,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
    pub stroke_dash: Option<Vec<f32>>,
    /// Draw-on reveal of the whole path
    pub reveal: Option<Reveal>,
    pub zindex: Option<i32>,
}

impl SceneLineMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize)
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize)
    }

    pub fn points(&self) -> Vec<[f32; 2]> {
        self.x_iter().zip(self.y_iter()).map(|(x, y)| [*x, *y]).collect()
    }

    /// Total length of the polyline in pixels
    pub fn path_length(&self) -> f32 {
        self.points()
            .windows(2)
            .map(|w| ((w[1][0] - w[0][0]).powi(2) + (w[1][1] - w[0][1]).powi(2)).sqrt())
            .sum()
    }
}

impl Default for SceneLineMark {
    fn default() -> Self {
        Self {
            name: "line_mark".to_string(),
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            stroke: BLACK,
            stroke_width: 1.0,
            stroke_cap: Default::default(),
            stroke_join: Default::default(),
            stroke_dash: None,
            reveal: None,
            zindex: None,
        }
    }
}

impl From<SceneLineMark> for SceneMark {
    fn from(mark: SceneLineMark) -> Self {
        SceneMark::Line(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_length() {
        let mark = SceneLineMark {
            len: 3,
            x: vec![0.0, 3.0, 3.0].into(),
            y: vec![0.0, 4.0, 10.0].into(),
            ..Default::default()
        };
        assert_eq!(mark.path_length(), 11.0);
        assert_eq!(mark.points()[1], [3.0, 4.0]);
    }
}
